use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::AppError;
use crate::ports::{CommandOutput, ShellPort, display_command};

/// `std::process::Command`-backed shell adapter.
///
/// Commands run with a structured argument list (no shell interpolation) in
/// the configured working directory, blocking until the tool exits. No
/// timeout is applied; a hung tool hangs the flow.
#[derive(Debug, Clone)]
pub struct ProcessShell {
    root: PathBuf,
}

impl ProcessShell {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Adapter rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ShellPort for ProcessShell {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, AppError> {
        let output = Command::new(program)
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| AppError::CommandSpawn {
                command: display_command(program, args),
                details: e.to_string(),
            })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        })
    }
}
