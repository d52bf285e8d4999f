//! File system operations on the project binary.

pub mod binary;

pub use binary::{check_rename, rename_binary};
