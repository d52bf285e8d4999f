use super::Manifest;
use crate::error::{RenameError, Result};
use regex::Regex;
use std::fs;

/// The single-entry bin declaration as it appears in a generated manifest.
///
/// ```
/// assert_eq!(app_rename::manifest::bin_declaration("app"), r#""bin": ["app"]"#);
/// ```
pub fn bin_declaration(name: &str) -> String {
    format!(r#""bin": ["{}"]"#, name)
}

/// Result of rewriting the bin declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    /// Whether the expected declaration was found. When `false`, `content`
    /// equals the original text.
    pub matched: bool,
}

impl Manifest {
    /// Returns `true` if the text holds `"bin": ["<current>"]` verbatim.
    pub fn declares_binary(&self, current: &str) -> bool {
        self.content.contains(&bin_declaration(current))
    }

    /// Replaces the first `"bin": ["<current>"]` with `"bin": ["<new_name>"]`.
    ///
    /// Any other `bin` shape (several entries, different spacing or quoting)
    /// is left untouched and reported through [`Rewrite::matched`].
    pub fn rewrite_binary(&self, current: &str, new_name: &str) -> Result<Rewrite> {
        let from = bin_declaration(current);

        if !self.content.contains(&from) {
            let bin_key = Regex::new(r#""bin"\s*:"#)?;
            if bin_key.is_match(&self.content) {
                log::debug!(
                    "bin declaration in {} is not of the form {}",
                    self.path.display(),
                    from
                );
            } else {
                log::debug!("No bin key in {}", self.path.display());
            }
            return Ok(Rewrite {
                content: self.content.clone(),
                matched: false,
            });
        }

        Ok(Rewrite {
            content: self.content.replacen(&from, &bin_declaration(new_name), 1),
            matched: true,
        })
    }

    /// Overwrites the manifest file with `content`.
    pub fn persist(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content).map_err(|e| {
            RenameError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write {}: {}", self.path.display(), e),
            ))
        })?;
        log::debug!("Wrote {}", self.path.display());
        Ok(())
    }
}
