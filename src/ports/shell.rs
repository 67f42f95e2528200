use crate::domain::AppError;

/// Captured result of one external-tool invocation.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Process boundary for the git and dvc command-line tools.
///
/// Implementations run one program with a structured argument list and
/// capture its output. `Err` is reserved for failure to start the process at
/// all; a started process that exits non-zero is an `Ok` with a non-zero
/// `code`, so callers can decide per call site whether that matters.
pub trait ShellPort {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, AppError>;

    /// Lenient variant reproducing the fire-and-forget runner contract:
    /// log a warning on failure, always hand back whatever stdout there was.
    fn run_logged(&self, program: &str, args: &[&str]) -> String {
        match self.run(program, args) {
            Ok(output) => {
                if !output.success() && !output.stderr.trim().is_empty() {
                    log::warn!(
                        "Command '{} {}' returned non-zero exit code {}: {}",
                        program,
                        args.join(" "),
                        output.code.map_or_else(|| "signal".to_string(), |c| c.to_string()),
                        output.stderr.trim()
                    );
                }
                output.stdout
            }
            Err(err) => {
                log::warn!("Command '{} {}' could not be run: {}", program, args.join(" "), err);
                String::new()
            }
        }
    }
}

/// Render a program and argument list for log lines and error messages.
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() { program.to_string() } else { format!("{} {}", program, args.join(" ")) }
}
