//! dvm: version datasets with DVC and Git.
//!
//! Wraps the `git` and `dvc` command-line tools to initialize data-version
//! tracking, configure remote storage, and commit auto-tagged data snapshots.
//! All persistent state lives in the external tools; this crate sequences
//! their invocations and decides when a new snapshot is due.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod logging;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::ProcessShell;
use app::{AppContext, commands};
use domain::Config;

pub use app::commands::init::InitOutcome;
pub use app::commands::storage::StorageOutcome;
pub use domain::{AppError, DriftState};

fn context() -> Result<(AppContext<ProcessShell>, Config), AppError> {
    let shell = ProcessShell::current()?;
    let root = shell.root().to_path_buf();
    let config = Config::load(&root)?;
    Ok((AppContext::new(shell, root), config))
}

/// Initialize DVC tracking in the current directory. Idempotent.
pub fn initialize_tracking() -> Result<InitOutcome, AppError> {
    let (ctx, _) = context()?;
    Ok(commands::init::execute(&ctx))
}

/// Configure the default remote storage target. Idempotent by remote name.
///
/// Arguments missing on the command line fall back to the `[storage]`
/// section of `dvm.toml`.
pub fn initialize_storage(
    name: Option<&str>,
    url: Option<&str>,
) -> Result<StorageOutcome, AppError> {
    let (ctx, config) = context()?;
    let name = Config::resolve(name, config.storage.remote.as_deref(), "storage.remote")?;
    let url = Config::resolve(url, config.storage.url.as_deref(), "storage.url")?;
    Ok(commands::storage::execute(&ctx, name, url))
}

/// Check the data folder for drift and commit a new tagged version if needed.
///
/// Returns the new version tag, or `None` when the data was up to date.
pub fn make_new_version(
    folder: Option<&str>,
    remote: Option<&str>,
) -> Result<Option<String>, AppError> {
    let (ctx, config) = context()?;
    let folder = Config::resolve(folder, config.data.folder.as_deref(), "data.folder")?;
    let remote = Config::resolve(remote, config.storage.remote.as_deref(), "storage.remote")?;
    Ok(commands::snapshot::execute(&ctx, folder, remote))
}

/// Report the drift state of the data folder without committing anything.
pub fn status(folder: Option<&str>) -> Result<DriftState, AppError> {
    let (ctx, config) = context()?;
    let folder = Config::resolve(folder, config.data.folder.as_deref(), "data.folder")?;
    Ok(commands::snapshot::check(&ctx, folder))
}
