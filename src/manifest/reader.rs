use super::Manifest;
use crate::error::{RenameError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

impl Manifest {
    /// Reads the manifest at `path`.
    ///
    /// # Errors
    ///
    /// - `MissingManifest`: no file at `path`
    /// - `Io`: the file exists but cannot be read
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            log::debug!("No manifest at {}", path.display());
            return Err(RenameError::MissingManifest(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            RenameError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })?;

        log::debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// First entry of the `bin` list.
    ///
    /// `None` when the text is not valid JSON, `bin` is absent or empty, or
    /// its first entry is not a string.
    pub fn current_binary_name(&self) -> Option<String> {
        let doc: Value = match serde_json::from_str(&self.content) {
            Ok(doc) => doc,
            Err(e) => {
                log::debug!("Manifest {} is not valid JSON: {}", self.path.display(), e);
                return None;
            }
        };

        doc.get("bin")?
            .as_array()?
            .first()?
            .as_str()
            .map(str::to_string)
    }
}
