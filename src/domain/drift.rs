//! Drift classification for a tracked data folder.
//!
//! Decides whether a snapshot commit is needed, based on the presence of the
//! `<folder>.dvc` marker file and the output of the status query.

/// Phrase dvc prints when the tracked data matches the last snapshot.
pub const UP_TO_DATE_MARKER: &str = "Data and pipelines are up to date";

/// Outcome of the drift check for a data folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriftState {
    /// No `.dvc` marker file exists; the folder has never been snapshotted.
    Untracked,
    /// Status query reports the data matches the last snapshot.
    UpToDate,
    /// Status query reports pending changes.
    Drifted { status: String },
    /// The status query itself failed (missing binary or non-zero exit).
    CheckFailed { details: String },
}

impl DriftState {
    /// Whether this state leads to the snapshot commit flow.
    ///
    /// `CheckFailed` commits too: an ambiguous status is treated as "needs
    /// commit" rather than halting the pipeline.
    pub fn needs_commit(&self) -> bool {
        !matches!(self, DriftState::UpToDate)
    }
}

impl std::fmt::Display for DriftState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriftState::Untracked => write!(f, "untracked"),
            DriftState::UpToDate => write!(f, "up-to-date"),
            DriftState::Drifted { .. } => write!(f, "drifted"),
            DriftState::CheckFailed { .. } => write!(f, "check-failed"),
        }
    }
}

/// Classify a data folder.
///
/// `query` runs the status check and is only invoked when the marker file
/// exists; it yields the status text on success or failure details otherwise.
pub fn classify<F>(marker_exists: bool, query: F) -> DriftState
where
    F: FnOnce() -> Result<String, String>,
{
    if !marker_exists {
        return DriftState::Untracked;
    }
    match query() {
        Ok(status) if status.contains(UP_TO_DATE_MARKER) => DriftState::UpToDate,
        Ok(status) => DriftState::Drifted { status },
        Err(details) => DriftState::CheckFailed { details },
    }
}
