//! Snapshot flows: drift check, unconditional commit, and the combined
//! check-then-commit entry point.

use log::{error, info};

use crate::app::AppContext;
use crate::domain::drift::{self, DriftState};
use crate::domain::version;
use crate::ports::ShellPort;

/// Per-folder metadata file indicating the folder is under version tracking.
pub fn marker_file(folder: &str) -> String {
    format!("{folder}.dvc")
}

/// Classify the drift state of a data folder without side effects.
pub fn check<S: ShellPort>(ctx: &AppContext<S>, folder: &str) -> DriftState {
    let marker = marker_file(folder);
    let marker_exists = ctx.root().join(&marker).exists();

    drift::classify(marker_exists, || match ctx.shell().run("dvc", &["status", &marker]) {
        Ok(output) if output.success() => Ok(output.stdout),
        Ok(output) => Err(format!(
            "'dvc status {marker}' exited with code {}: {}",
            output.code.map_or_else(|| "signal".to_string(), |c| c.to_string()),
            output.stderr.trim()
        )),
        Err(err) => Err(err.to_string()),
    })
}

/// Commit a new data version unconditionally.
///
/// Resolves the next `v<N>` tag from the existing git tags, snapshots the
/// folder, commits, tags, and pushes data and history. Each step is
/// fire-and-forget; once issued there is no rollback.
pub fn commit<S: ShellPort>(ctx: &AppContext<S>, folder: &str, remote: &str) -> String {
    let shell = ctx.shell();

    let listing = shell.run_logged("git", &["tag", "--list"]);
    let tags = version::tags_from_listing(&listing);
    let current = version::current_version(tags);
    let next = format!("v{}", current.saturating_add(1));

    shell.run_logged("dvc", &["add", folder]);
    shell.run_logged("git", &["add", "."]);
    shell.run_logged(
        "git",
        &[
            "commit",
            "-n",
            "-m",
            &format!("Updated version of the data from v{current} to {next}"),
        ],
    );
    shell.run_logged("git", &["tag", "-a", &next, "-m", &format!("Data version {next}")]);
    shell.run_logged("dvc", &["push", &marker_file(folder), "--remote", remote]);
    shell.run_logged("git", &["push", "--follow-tags"]);
    shell.run_logged("git", &["push", "-f", "--tags"]);
    next
}

/// Check for drift and commit a new version when needed.
///
/// Returns the new tag, or `None` when the data was already up to date. A
/// failed status check logs the failure and commits anyway: ambiguous state
/// is treated as "needs commit".
pub fn execute<S: ShellPort>(ctx: &AppContext<S>, folder: &str, remote: &str) -> Option<String> {
    match check(ctx, folder) {
        DriftState::Untracked => {
            info!("No DVC file found at {}. Creating initial version...", marker_file(folder));
        }
        DriftState::UpToDate => {
            info!("Data and pipelines are up to date.");
            return None;
        }
        DriftState::Drifted { status } => {
            info!("DVC status: {}", status.trim());
        }
        DriftState::CheckFailed { details } => {
            error!("Error checking DVC status: {details}");
        }
    }
    Some(commit(ctx, folder, remote))
}
