//! Workflow steps.

pub mod rename;

pub use rename::{RenameOutcome, Renamer, execute};
