//! Process-wide logger setup.
//!
//! Log lines carry the hostname, level, and originating module:
//! `[build-agent-3] INFO dvm::app::commands::init: Initializing DVC...`
//! The filter comes from `RUST_LOG`, defaulting to `info`.

use std::io::Write;

use env_logger::Env;

/// Initialize the logging sink. Call once at process start; later calls are
/// no-ops so tests may call it freely.
pub fn init() {
    let hostname = whoami::hostname().unwrap_or_else(|_| "unknown-host".to_string());

    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            writeln!(
                buf,
                "[{}] {} {}: {}",
                hostname,
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
