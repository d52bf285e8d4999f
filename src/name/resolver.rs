use crate::config::ProjectRoot;
use crate::error::{RenameError, Result};
use crate::name::prompt::NamePrompt;
use std::fmt::{self, Display};

pub const NAME_QUESTION: &str = "What is your application name?";

/// Lowercased, non-empty application name.
///
/// Used verbatim as the new binary file name and as the new `bin` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationName(String);

impl ApplicationName {
    pub fn new(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(RenameError::EmptyName);
        }
        Ok(Self(raw.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ApplicationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ApplicationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Determines the application name.
///
/// ## Order
/// 1. `argument`, if present and non-empty
/// 2. the answer to [`NAME_QUESTION`]
/// 3. the trimmed directory name of `root`
///
/// No character-set or length validation is applied.
///
/// # Errors
///
/// `EmptyName` if all three sources are empty, or an I/O error from the prompt.
pub fn resolve_application_name(
    argument: Option<&str>,
    prompt: &mut dyn NamePrompt,
    root: &ProjectRoot,
) -> Result<ApplicationName> {
    if let Some(name) = argument.filter(|n| !n.is_empty()) {
        log::debug!("Using application name from argument: {}", name);
        return ApplicationName::new(name);
    }

    if let Some(answer) = prompt.ask(NAME_QUESTION)? {
        log::debug!("Using application name from prompt: {}", answer);
        return ApplicationName::new(&answer);
    }

    let fallback = root.base_name();
    log::debug!("Falling back to project directory name: '{}'", fallback);
    ApplicationName::new(&fallback)
}
