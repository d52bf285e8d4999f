//! Binary entry point for `app-rename`.

use colored::Colorize;
use std::process;

fn main() {
    if let Err(e) = app_rename::run() {
        eprintln!("{} {}", "[ERROR]".red().bold(), e);
        process::exit(e.exit_code());
    }
}
