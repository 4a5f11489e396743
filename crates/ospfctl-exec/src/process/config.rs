use std::{fmt, path::PathBuf};

use crate::ExecError;

/// Settings shared by every command a [`crate::ProcessExecutor`] spawns.
#[derive(Debug, Clone)]
pub struct ProcessConfig {
    /// Directory commands run in; `None` inherits ours.
    ///
    /// `docker compose` resolves the compose file relative to it.
    pub workdir: Option<PathBuf>,
    /// Print `> <command>` on stdout before running an inherited-output command.
    pub echo: bool,
    /// Captured lines longer than this are truncated in trace logs.
    pub max_logged_line: usize,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            workdir: None,
            echo: true,
            max_logged_line: 512,
        }
    }
}

impl ProcessConfig {
    /// Validate before the first spawn.
    ///
    /// Rules:
    /// - `workdir`, if set, exists and is a directory;
    /// - `max_logged_line` is not zero.
    pub fn validate(&self) -> Result<(), ExecError> {
        if let Some(dir) = &self.workdir {
            if !dir.exists() {
                return Err(ExecError::MissingWorkdir(dir.clone()));
            }
            if !dir.is_dir() {
                return Err(ExecError::NotADirectory(dir.clone()));
            }
        }
        if self.max_logged_line == 0 {
            return Err(ExecError::InvalidConfig(
                "max_logged_line cannot be zero".into(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for ProcessConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProcessConfig(workdir={:?}, echo={}, max_logged_line={})",
            self.workdir, self.echo, self.max_logged_line
        )
    }
}
