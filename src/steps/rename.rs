//! Orchestration of the application rename.
//!
//! The steps run in a fixed order and each returns a `Result`, so the
//! first failure short-circuits the rest:
//!
//! 1. Resolve the application name
//! 2. Read the manifest and derive the current binary name
//! 3. Rename the binary file
//! 4. Rewrite the manifest bin declaration and persist it
//!
//! The binary is renamed before the manifest is written. If step 4 fails
//! or its pattern does not match, the binary stays renamed.

use crate::cli::RenameArgs;
use crate::config::RenameConfig;
use crate::error::{RenameError, Result};
use crate::fs::{check_rename, rename_binary};
use crate::manifest::{Manifest, bin_declaration};
use crate::name::{ApplicationName, NamePrompt, NoPrompt, TerminalPrompt, resolve_application_name};

use colored::Colorize;
use std::path::Path;

const TITLE: &str = "Crafting application...";

/// What a run did (or would do, in dry-run mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOutcome {
    pub name: ApplicationName,
    pub previous: String,
    /// `false` when the bin declaration did not have the expected shape and
    /// the manifest was written back unchanged.
    pub manifest_updated: bool,
    pub dry_run: bool,
}

/// Runs the rename workflow against one project root.
pub struct Renamer {
    config: RenameConfig,
}

impl Renamer {
    pub fn new(config: RenameConfig) -> Self {
        Self { config }
    }

    /// Executes all steps.
    ///
    /// # Errors
    ///
    /// - `EmptyName`: no name could be resolved
    /// - `MissingManifest`: nothing is mutated
    /// - `UnknownBinary`: manifest has no usable `bin[0]`; nothing is mutated
    /// - `PatternMismatch`: `strict` only; nothing is mutated
    /// - `Io`: rename or manifest write failed
    pub fn run(
        &self,
        argument: Option<&str>,
        prompt: &mut dyn NamePrompt,
    ) -> Result<RenameOutcome> {
        print_title(TITLE);

        let name = resolve_application_name(argument, prompt, &self.config.project_root)?;
        log::info!("Application name: {}", name);

        let manifest = Manifest::load(&self.config.manifest_path())?;
        let current = manifest
            .current_binary_name()
            .ok_or_else(|| RenameError::UnknownBinary(manifest.path().to_path_buf()))?;
        log::debug!("Current binary: {}", current);

        if self.config.strict && !manifest.declares_binary(&current) {
            return Err(RenameError::PatternMismatch {
                expected: bin_declaration(&current),
            });
        }

        if self.config.dry_run {
            return self.plan(&manifest, &current, name);
        }

        self.rename_binary(&current, &name)?;
        let manifest_updated = self.update_manifest(&manifest, &current, &name)?;

        Ok(RenameOutcome {
            name,
            previous: current,
            manifest_updated,
            dry_run: false,
        })
    }

    fn rename_binary(&self, current: &str, name: &ApplicationName) -> Result<()> {
        rename_binary(&self.config.project_root, current, name.as_str())?;
        println!("Renaming application: {}", "✔".green());
        Ok(())
    }

    fn update_manifest(
        &self,
        manifest: &Manifest,
        current: &str,
        name: &ApplicationName,
    ) -> Result<bool> {
        let rewrite = manifest.rewrite_binary(current, name.as_str())?;
        manifest.persist(&rewrite.content)?;
        println!(
            "Updating {}: {}",
            manifest_label(manifest.path()),
            "✔".green()
        );
        Ok(rewrite.matched)
    }

    fn plan(
        &self,
        manifest: &Manifest,
        current: &str,
        name: ApplicationName,
    ) -> Result<RenameOutcome> {
        check_rename(&self.config.project_root, current, name.as_str())?;
        let rewrite = manifest.rewrite_binary(current, name.as_str())?;

        println!(
            "{:>12} rename {} → {}",
            "Pending".blue().bold(),
            current.yellow(),
            name.as_str().green()
        );
        if rewrite.matched {
            println!(
                "{:>12} {} in {}",
                "Pending".blue().bold(),
                bin_declaration(name.as_str()),
                manifest.path().display()
            );
        } else {
            println!(
                "{:>12} {} left unchanged",
                "Pending".blue().bold(),
                manifest.path().display()
            );
        }
        println!("\n{}", "DRY RUN - No changes were made".yellow().bold());

        Ok(RenameOutcome {
            name,
            previous: current.to_string(),
            manifest_updated: rewrite.matched,
            dry_run: true,
        })
    }
}

/// Entry point for the `rename` subcommand.
pub fn execute(args: RenameArgs) -> Result<()> {
    let config = RenameConfig::from_args(&args)?;
    log::debug!("Project root: {}", config.project_root.path().display());

    let mut prompt: Box<dyn NamePrompt> = if config.interactive {
        Box::new(TerminalPrompt)
    } else {
        Box::new(NoPrompt)
    };

    let outcome = Renamer::new(config).run(args.name.as_deref(), prompt.as_mut())?;
    log::info!(
        "Renamed {} → {} (manifest updated: {})",
        outcome.previous,
        outcome.name,
        outcome.manifest_updated
    );
    Ok(())
}

fn print_title(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "=".repeat(title.chars().count()).bold());
    println!();
}

/// `composer` for `composer.json`.
fn manifest_label(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "manifest".to_string())
}
