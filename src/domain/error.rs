use std::io;

use thiserror::Error;

/// Library-wide error type for dvm operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// An external tool could not be spawned at all (missing binary, bad permissions).
    #[error("Failed to run '{command}': {details}")]
    CommandSpawn { command: String, details: String },

    /// A required setting was neither passed on the command line nor present in dvm.toml.
    #[error("Missing setting '{0}': pass it as an argument or set it in dvm.toml")]
    MissingSetting(&'static str),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}
