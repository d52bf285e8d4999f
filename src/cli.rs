use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::manifest::MANIFEST_FILE;

#[derive(Parser)]
#[command(name = "app-rename", version, about = "Rename your application")]
pub struct AppCli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: AppCommand,
}

#[derive(Subcommand)]
pub enum AppCommand {
    /// Rename the application binary and its manifest declaration.
    Rename(RenameArgs),
}

/// Arguments for the `rename` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct RenameArgs {
    /// New application name (prompted for when omitted)
    pub name: Option<String>,

    /// Directory holding the manifest and the binary (defaults to current dir)
    #[arg(long, value_name = "PATH")]
    pub project_root: Option<PathBuf>,

    /// Manifest file name, relative to the project root
    #[arg(long, value_name = "FILE", default_value = MANIFEST_FILE)]
    pub manifest: String,

    /// Do not ask any interactive question
    #[arg(long, short = 'n')]
    pub no_interaction: bool,

    /// Show what would change without applying any modifications
    #[arg(long)]
    pub dry_run: bool,

    /// Fail before renaming if the manifest bin declaration cannot be rewritten
    #[arg(long)]
    pub strict: bool,
}
