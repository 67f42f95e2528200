pub mod process_shell;

pub use process_shell::ProcessShell;
