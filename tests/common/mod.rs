//! Shared fixtures for app-rename integration tests.
//!
//! Each test scaffolds a throwaway project with a `composer.json` and an
//! executable entry point, then drives the compiled binary against it.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SKELETON_MANIFEST: &str = r#"{
    "name": "acme/skeleton",
    "description": "A console application",
    "type": "project",
    "require": {
        "php": "^8.1"
    },
    "bin": ["skeleton"]
}
"#;

/// A scaffolded project living in `<tmp>/<dir_name>`.
pub struct Project {
    _temp: TempDir,
    pub root: PathBuf,
}

impl Project {
    pub fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    pub fn manifest(&self) -> String {
        fs::read_to_string(self.path("composer.json")).unwrap()
    }
}

/// Creates a project with the given manifest text and binary file.
#[allow(unused)]
pub fn create_project(dir_name: &str, manifest: &str, binary: &str) -> Project {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join(dir_name);
    fs::create_dir(&root).unwrap();

    fs::write(root.join("composer.json"), manifest).unwrap();
    fs::write(
        root.join(binary),
        "#!/usr/bin/env php\n<?php\n\nrequire __DIR__.'/vendor/autoload.php';\n",
    )
    .unwrap();

    Project { _temp: temp, root }
}

/// The stock skeleton project.
#[allow(unused)]
pub fn create_skeleton() -> Project {
    create_project("skeleton", SKELETON_MANIFEST, "skeleton")
}

/// Runs `app-rename rename` against `root` without interaction.
pub fn run_rename(root: &Path, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("app-rename");
    cmd.arg("rename")
        .arg("--project-root")
        .arg(root)
        .arg("--no-interaction")
        .args(extra_args)
        .env_remove("RUST_LOG");

    cmd.assert()
}
