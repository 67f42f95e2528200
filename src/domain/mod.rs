pub mod config;
pub mod drift;
mod error;
pub mod version;

pub use config::Config;
pub use drift::DriftState;
pub use error::AppError;
