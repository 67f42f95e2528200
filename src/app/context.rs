use std::path::{Path, PathBuf};

use crate::ports::ShellPort;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ShellPort> {
    shell: S,
    root: PathBuf,
}

impl<S: ShellPort> AppContext<S> {
    /// Create a new application context rooted at a repository checkout.
    pub fn new(shell: S, root: PathBuf) -> Self {
        Self { shell, root }
    }

    /// Get a reference to the shell runner.
    pub fn shell(&self) -> &S {
        &self.shell
    }

    /// Repository root all paths are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
