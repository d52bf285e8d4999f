//! Rename a freshly scaffolded application.
//!
//! Resolves an application name, renames the project binary to it and
//! rewrites the manifest `bin` declaration to match.

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod manifest;
pub mod name;
pub mod steps;

pub use error::*;

pub fn run() -> Result<()> {
    use clap::Parser;
    use cli::AppCommand;

    let cli = cli::AppCli::parse();
    init_logger(cli.verbose);

    match cli.command {
        AppCommand::Rename(args) => steps::rename::execute(args),
    }
}

/// Installs `env_logger`; `RUST_LOG` wins over `-v`.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}
