use crate::command::{ExecutableCommand, Flow, Stdout};
use crate::env::Environment;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::io::Write;
use std::process::Command;

/// Anything that is not a builtin: launched as a child process by name.
pub struct ExternalCommand {
    name: OsString,
    args: Vec<OsString>,
}

impl ExternalCommand {
    pub fn new(name: OsString, args: Vec<OsString>) -> Self {
        Self { name, args }
    }
}

impl ExecutableCommand for ExternalCommand {
    /// Spawns the program and blocks until it terminates.
    ///
    /// The platform's executable search resolves `name`. The child gets the
    /// arguments exactly as typed (the program name is argument zero) and
    /// inherits the parent's environment, stdin and stderr; a stopped child
    /// keeps the wait alive until it actually terminates. The exit status
    /// is deliberately not inspected: success or failure, the interpreter
    /// moves on to the next line.
    fn execute(
        self: Box<Self>,
        stdout: Box<dyn Stdout>,
        _diag: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        let mut child = Command::new(&self.name)
            .args(&self.args)
            .stdout(stdout.stdio())
            .current_dir(&env.current_dir)
            .spawn()
            .with_context(|| self.name.to_string_lossy().into_owned())?;

        child
            .wait()
            .with_context(|| format!("wait: {}", self.name.to_string_lossy()))?;

        Ok(Flow::Continue)
    }
}
