//! Shared testing utilities for dvm CLI tests.
//!
//! Tests never touch real git or dvc: the harness places stub executables on
//! `PATH` that append every invocation to a log file and replay scripted
//! responses, so the full command sequences are observable.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// One scripted response for a stubbed tool invocation.
struct StubResponse {
    command: String,
    stdout: String,
    exit_code: i32,
}

/// Testing harness providing an isolated work directory with stubbed tools.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
    log_file: PathBuf,
    responses: Vec<StubResponse>,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with default (always-succeed) stubs.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&bin_dir).expect("Failed to create test bin directory");
        let log_file = root.path().join("tool-invocations.log");
        fs::write(&log_file, "").expect("Failed to create tool log");

        let mut ctx = Self { root, work_dir, bin_dir, log_file, responses: Vec::new() };
        ctx.write_stubs();
        ctx
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Script a response for an exact tool invocation, e.g.
    /// `("dvc status data.dvc", "changed outs", 0)`. Unscripted invocations
    /// succeed with empty output.
    pub fn stub(&mut self, command: &str, stdout: &str, exit_code: i32) {
        self.responses.push(StubResponse {
            command: command.to_string(),
            stdout: stdout.to_string(),
            exit_code,
        });
        self.write_stubs();
    }

    /// Remove a stub tool entirely, so invoking it fails to spawn.
    pub fn remove_tool(&self, tool: &str) {
        fs::remove_file(self.bin_dir.join(tool)).expect("Failed to remove stub tool");
    }

    /// Write `dvm.toml` into the work directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("dvm.toml"), content).expect("Failed to write dvm.toml");
    }

    /// Create the `<folder>.dvc` marker file for a tracked folder.
    pub fn track_folder(&self, folder: &str) {
        let marker = self.work_dir.join(format!("{folder}.dvc"));
        if let Some(parent) = marker.parent() {
            fs::create_dir_all(parent).expect("Failed to create marker parent");
        }
        fs::write(marker, "outs: []\n").expect("Failed to write marker file");
    }

    /// Create the `.dvc/` tracking directory.
    pub fn create_tracking_dir(&self) {
        fs::create_dir_all(self.work_dir.join(".dvc")).expect("Failed to create .dvc");
    }

    /// Every tool invocation so far, in order, e.g. `"git tag --list"`.
    pub fn tool_log(&self) -> Vec<String> {
        fs::read_to_string(&self.log_file)
            .expect("Failed to read tool log")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Whether the exact tool invocation appears in the log.
    pub fn tool_ran(&self, command: &str) -> bool {
        self.tool_log().iter().any(|line| line == command)
    }

    /// Build a command for invoking the compiled `dvm` binary with the stub
    /// tools first on `PATH`.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("dvm").expect("Failed to locate dvm binary");
        let path = std::env::var("PATH").unwrap_or_default();
        cmd.current_dir(&self.work_dir)
            .env("PATH", format!("{}:{}", self.bin_dir.display(), path))
            .env("RUST_LOG", "info");
        cmd
    }

    fn write_stubs(&self) {
        for tool in ["git", "dvc"] {
            self.write_stub(tool);
        }
    }

    /// Generate one stub: logs `"<tool> <args>"`, then replays the first
    /// matching scripted response or exits 0 silently.
    fn write_stub(&self, tool: &str) {
        let mut script = format!(
            "#!/bin/sh\ncmd=\"{tool} $*\"\nprintf '%s\\n' \"$cmd\" >> '{}'\ncase \"$cmd\" in\n",
            self.log_file.display()
        );
        for response in self.responses.iter().filter(|r| r.command.starts_with(tool)) {
            // Failures report on stderr, matching how the real tools behave.
            let redirect = if response.exit_code == 0 { "" } else { " >&2" };
            script.push_str(&format!(
                "  '{}') printf '%b\\n' '{}'{}; exit {} ;;\n",
                response.command,
                response.stdout.replace('\n', "\\n"),
                redirect,
                response.exit_code
            ));
        }
        script.push_str("  *) exit 0 ;;\nesac\n");

        let path = self.bin_dir.join(tool);
        fs::write(&path, script).expect("Failed to write stub tool");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("Failed to mark stub tool executable");
        }
    }
}
