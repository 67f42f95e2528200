//! Remote storage initializer: register the default push target for snapshots.

use log::info;

use crate::app::AppContext;
use crate::ports::ShellPort;

/// What the remote command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOutcome {
    /// A remote with this name was already listed; nothing was run.
    AlreadyConfigured,
    /// The remote was added and the config change committed.
    Configured,
}

/// Execute the remote storage setup.
///
/// Deduplication is by name against the `dvc remote list` output: re-running
/// with the same name is a no-op even when the URL differs.
pub fn execute<S: ShellPort>(ctx: &AppContext<S>, name: &str, url: &str) -> StorageOutcome {
    let shell = ctx.shell();
    let existing = shell.run_logged("dvc", &["remote", "list"]);
    if existing.trim().contains(name) {
        info!("DVC storage was already initialized.");
        return StorageOutcome::AlreadyConfigured;
    }

    info!("Initializing DVC storage...");
    shell.run_logged("dvc", &["remote", "add", "-d", name, url]);
    shell.run_logged("git", &["add", ".dvc/config"]);
    shell.run_logged(
        "git",
        &["commit", "-n", "-m", &format!("Configured remote storage at: {url}")],
    );
    StorageOutcome::Configured
}
