//! Launching the user's text editor

use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;

/// Used when nothing else is configured
pub const FALLBACK_EDITOR: &str = "vi";

/// Editor errors
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Editor command is empty")]
    Empty,

    #[error("Cannot parse editor command: {0}")]
    Unparsable(String),

    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// A resolved editor command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    program: String,
    args: Vec<String>,
}

impl Editor {
    /// Parse a shell-style command such as `code --wait`
    pub fn parse(command: &str) -> Result<Self, EditorError> {
        let mut words = shlex::split(command)
            .ok_or_else(|| EditorError::Unparsable(command.to_string()))?
            .into_iter();
        let program = words.next().ok_or(EditorError::Empty)?;

        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    /// Pick the editor: explicit override, then $VISUAL, then $EDITOR.
    ///
    /// `lookup` reads environment variables; blank values are skipped.
    pub fn resolve<F>(preferred: Option<&str>, lookup: F) -> Result<Self, EditorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let command = preferred
            .map(str::to_string)
            .into_iter()
            .chain(lookup("VISUAL"))
            .chain(lookup("EDITOR"))
            .find(|cmd| !cmd.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_EDITOR.to_string());

        tracing::debug!("Using editor command: {}", command);
        Self::parse(&command)
    }

    /// Resolve against the process environment
    pub fn from_env(preferred: Option<&str>) -> Result<Self, EditorError> {
        Self::resolve(preferred, |key| std::env::var(key).ok())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Open `path` and block until the editor exits
    pub fn open(&self, path: &Path) -> Result<ExitStatus, EditorError> {
        tracing::debug!("Launching {} on {:?}", self.program, path);

        Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|source| EditorError::Spawn {
                program: self.program.clone(),
                source,
            })
    }
}

/// Process exit code to report for an editor's exit status.
///
/// Codes outside `0..=255` and signal deaths map to 1.
pub fn exit_code(status: ExitStatus) -> u8 {
    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(1)
}
