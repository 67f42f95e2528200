//! Tracking initializer: set up DVC in a repository checkout.

use log::info;

use crate::app::AppContext;
use crate::ports::ShellPort;

/// Hidden directory marking that DVC tracking is active.
pub const TRACKING_DIR: &str = ".dvc";

/// What the init command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The tracking directory already existed; nothing was run.
    AlreadyInitialized,
    /// Tracking was set up and committed.
    Initialized,
}

/// Execute the init command.
///
/// Idempotent on the existence of `.dvc/`: the second call is a no-op. The
/// individual steps are fire-and-forget; a partial failure leaves whatever
/// the tools managed to do in place.
pub fn execute<S: ShellPort>(ctx: &AppContext<S>) -> InitOutcome {
    if ctx.root().join(TRACKING_DIR).exists() {
        info!("DVC is already initialized.");
        return InitOutcome::AlreadyInitialized;
    }

    info!("Initializing DVC...");
    let shell = ctx.shell();
    shell.run_logged("dvc", &["init"]);
    shell.run_logged("dvc", &["config", "core.analytics", "false"]);
    shell.run_logged("dvc", &["config", "core.autostage", "true"]);
    shell.run_logged("git", &["add", TRACKING_DIR]);
    shell.run_logged("git", &["commit", "-n", "-m", "Initialized DVC"]);
    InitOutcome::Initialized
}
