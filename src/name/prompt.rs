//! Interactive name prompt.
//!
//! Only asks when stdin is a terminal; piped or closed stdin yields no
//! answer so the resolver falls back to the directory name.

use crate::error::Result;
use colored::Colorize;
use std::io::{self, BufRead, IsTerminal, Write};

/// Source of an interactively supplied answer.
pub trait NamePrompt {
    /// Asks `question`; `None` means no usable answer was given.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;
}

/// Prompt that never answers (`--no-interaction`).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPrompt;

impl NamePrompt for NoPrompt {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        log::debug!("Non-interactive run, not asking '{}'", question);
        Ok(None)
    }
}

/// Prompt over an arbitrary reader/writer pair.
pub struct ReaderPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ReaderPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> NamePrompt for ReaderPrompt<R, W> {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        writeln!(self.output, " {}:", question.green())?;
        write!(self.output, " > ")?;
        self.output.flush()?;

        let mut response = String::new();
        if self.input.read_line(&mut response)? == 0 {
            log::debug!("Prompt input closed before an answer was given");
            return Ok(None);
        }
        writeln!(self.output)?;

        let answer = response.trim();
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(answer.to_string()))
        }
    }
}

/// Prompt on the process terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl NamePrompt for TerminalPrompt {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            log::debug!("stdin is not a terminal, skipping prompt");
            return Ok(None);
        }

        ReaderPrompt::new(stdin.lock(), io::stdout()).ask(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reader_prompt_returns_trimmed_answer() {
        let mut output = Vec::new();
        let mut prompt = ReaderPrompt::new(Cursor::new("  Acme Tool \n"), &mut output);

        let answer = prompt.ask("What is your application name?").unwrap();
        assert_eq!(answer.as_deref(), Some("Acme Tool"));

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("What is your application name?"));
        assert!(rendered.contains(" > "));
    }

    #[test]
    fn test_blank_answer_is_none() {
        let mut prompt = ReaderPrompt::new(Cursor::new("\n"), Vec::new());
        assert_eq!(prompt.ask("name?").unwrap(), None);
    }

    #[test]
    fn test_closed_input_is_none() {
        let mut prompt = ReaderPrompt::new(Cursor::new(""), Vec::new());
        assert_eq!(prompt.ask("name?").unwrap(), None);
    }

    #[test]
    fn test_no_prompt_never_answers() {
        assert_eq!(NoPrompt.ask("name?").unwrap(), None);
    }
}
