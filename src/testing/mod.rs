
pub use script_shell::ScriptShell;
