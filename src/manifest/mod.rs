//! Project manifest (`composer.json`) handling.
//!
//! The manifest is read once as text. The current binary name is derived
//! from its parsed `bin` list; the rename itself is a literal text
//! substitution so the rest of the file keeps its formatting byte-for-byte.

mod reader;
mod writer;

pub use writer::{Rewrite, bin_declaration};

use std::path::PathBuf;

/// Default manifest file name under the project root.
pub const MANIFEST_FILE: &str = "composer.json";

/// Raw manifest text and where it came from.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    content: String,
}

impl Manifest {
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}
