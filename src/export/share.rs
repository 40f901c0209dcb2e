use std::path::PathBuf;
use std::process::Command;

use tracing::warn;

use crate::error::{Error, Result};

/// A document ready to be handed to a share mechanism
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub path: PathBuf,
    pub mime_type: &'static str,
    pub dialog_title: &'static str,
}

/// Platform mechanism that delivers a written export somewhere else
pub trait ShareTarget {
    fn is_available(&self) -> bool;
    fn share(&self, request: &ShareRequest) -> Result<()>;
}

/// Used when the platform offers no way to share
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShareTarget;

impl ShareTarget for NoShareTarget {
    fn is_available(&self) -> bool {
        false
    }

    fn share(&self, _request: &ShareRequest) -> Result<()> {
        Err(Error::Share("no share target available".to_string()))
    }
}

/// Shares by running a user-configured command with the file path appended.
///
/// The mime type and title are exported as `NOTECMD_SHARE_MIME` and
/// `NOTECMD_SHARE_TITLE` for commands that care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandShare {
    program: String,
    args: Vec<String>,
}

impl CommandShare {
    /// Parse a command line; `None` if it is blank or malformed.
    ///
    /// Plain text is split on whitespace with no quoting. A JSON array of
    /// strings is taken word for word, which is how a program or argument
    /// containing spaces is written: `["/opt/My Tools/share", "--to", "a b"]`.
    pub fn parse(command_line: &str) -> Option<Self> {
        let trimmed = command_line.trim();
        let words: Vec<String> = if trimmed.starts_with('[') {
            match serde_json::from_str(trimmed) {
                Ok(words) => words,
                Err(e) => {
                    warn!(error = %e, "share command is not a JSON array of strings");
                    return None;
                }
            }
        } else {
            trimmed.split_whitespace().map(str::to_string).collect()
        };

        let mut words = words.into_iter();
        let program = words.next().filter(|p| !p.trim().is_empty())?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl ShareTarget for CommandShare {
    fn is_available(&self) -> bool {
        true
    }

    fn share(&self, request: &ShareRequest) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(&request.path)
            .env("NOTECMD_SHARE_MIME", request.mime_type)
            .env("NOTECMD_SHARE_TITLE", request.dialog_title)
            .status()
            .map_err(|e| Error::Share(format!("could not run {}: {}", self.program, e)))?;

        if !status.success() {
            return Err(Error::Share(format!("{} exited with {}", self.program, status)));
        }
        Ok(())
    }
}
