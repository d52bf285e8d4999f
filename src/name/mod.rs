//! Application name resolution.
//!
//! The name comes from the command-line argument, then an interactive
//! prompt, then the project directory name, and is always lowercased.

pub mod prompt;
pub mod resolver;

pub use prompt::{NamePrompt, NoPrompt, ReaderPrompt, TerminalPrompt};
pub use resolver::{ApplicationName, NAME_QUESTION, resolve_application_name};
