mod shell;

pub use shell::{CommandOutput, ShellPort, display_command};
