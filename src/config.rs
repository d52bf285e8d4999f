//! Run configuration.
//!
//! Built once from the command line and handed to the workflow; nothing in
//! the crate reads the project location from ambient state.

use crate::cli::RenameArgs;
use crate::error::Result;
use anyhow::Context;
use std::ffi::OsString;
use std::fs;
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};

/// Base directory containing both the manifest and the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot(PathBuf);

impl ProjectRoot {
    /// Wraps `path`, canonicalising it when it exists so that `.` still has
    /// a usable directory name.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match fs::canonicalize(&path) {
            Ok(canonical) => Self(canonical),
            Err(e) => {
                log::debug!("Could not canonicalize {}: {}", path.display(), e);
                Self(path)
            }
        }
    }

    /// Uses the process working directory.
    pub fn current_dir() -> Result<Self> {
        let cwd =
            std::env::current_dir().context("Failed to determine the current directory")?;
        Ok(Self::new(cwd))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Appends `file_name` to the root.
    ///
    /// Unlike [`Path::join`], an absolute `file_name` does not replace the
    /// root: `/tmp/x` resolves to `<root>/tmp/x`.
    pub fn join(&self, file_name: impl AsRef<Path>) -> PathBuf {
        let mut joined = OsString::from(self.0.as_os_str());
        joined.push(MAIN_SEPARATOR_STR);
        joined.push(file_name.as_ref().as_os_str());
        PathBuf::from(joined)
    }

    /// Trimmed directory name, empty when the root has none (e.g. `/`).
    pub fn base_name(&self) -> String {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().trim().to_string())
            .unwrap_or_default()
    }
}

/// Settings for a single rename run.
#[derive(Debug, Clone)]
pub struct RenameConfig {
    pub project_root: ProjectRoot,
    pub manifest_file: String,
    pub interactive: bool,
    pub dry_run: bool,
    pub strict: bool,
}

impl RenameConfig {
    pub fn new(project_root: ProjectRoot) -> Self {
        Self {
            project_root,
            manifest_file: crate::manifest::MANIFEST_FILE.to_string(),
            interactive: true,
            dry_run: false,
            strict: false,
        }
    }

    pub fn from_args(args: &RenameArgs) -> Result<Self> {
        let project_root = match &args.project_root {
            Some(path) => ProjectRoot::new(path),
            None => ProjectRoot::current_dir()?,
        };

        Ok(Self {
            project_root,
            manifest_file: args.manifest.clone(),
            interactive: !args.no_interaction,
            dry_run: args.dry_run,
            strict: args.strict,
        })
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.project_root.join(&self.manifest_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_base_name_of_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("my-app");
        fs::create_dir(&dir).unwrap();

        let root = ProjectRoot::new(&dir);
        assert_eq!(root.base_name(), "my-app");
    }

    #[test]
    fn test_base_name_is_trimmed() {
        let root = ProjectRoot::new("/does/not/exist/ spaced ");
        assert_eq!(root.base_name(), "spaced");
    }

    #[test]
    fn test_root_without_file_name() {
        let root = ProjectRoot::new("/");
        assert_eq!(root.base_name(), "");
    }

    #[test]
    fn test_join_stays_under_root() {
        let temp = TempDir::new().unwrap();
        let root = ProjectRoot::new(temp.path());

        let joined = root.join("/tmp/outside-bin");
        assert!(joined.starts_with(root.path()));
        assert_eq!(joined, root.path().join("tmp/outside-bin"));
        assert_eq!(root.join("app"), root.path().join("app"));
    }

    #[test]
    fn test_manifest_path_uses_configured_file() {
        let temp = TempDir::new().unwrap();
        let mut config = RenameConfig::new(ProjectRoot::new(temp.path()));
        assert!(config.manifest_path().ends_with("composer.json"));

        config.manifest_file = "app.json".to_string();
        assert!(config.manifest_path().ends_with("app.json"));
    }
}
