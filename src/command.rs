use crate::env::Environment;
use anyhow::Result;
use std::io::Write;
use std::process::Stdio;

/// Tells the interpreter loop whether to keep prompting after a dispatch.
///
/// Builtins decide this for themselves (only `exit` stops the loop);
/// launching an external program always continues, whatever its exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read and dispatch another line.
    Continue,
    /// Terminate the interpreter loop.
    Exit,
}

/// A writable output stream that can also be turned into a [`Stdio`] handle
/// for spawning child processes.
///
/// Builtins write into it directly; external commands hand it to
/// `std::process::Command` instead. A blanket implementation covers any
/// `Write + Into<Stdio>` type, so a `File` works out of the box.
pub trait Stdout: Write {
    fn stdio(self: Box<Self>) -> Stdio;
}

impl<T: Write + Into<Stdio>> Stdout for T {
    fn stdio(self: Box<Self>) -> Stdio {
        (*self).into()
    }
}

/// Object-safe interface for anything the dispatcher can run: builtins
/// (through a blanket impl) and external commands alike.
pub trait ExecutableCommand {
    /// Executes the command.
    ///
    /// `stdout` carries regular output and becomes the child's stdout for
    /// external commands; `diag` receives user-visible error text. An `Err`
    /// is reported and absorbed by the dispatcher, so no failure outlives
    /// the loop iteration that produced it.
    fn execute(
        self: Box<Self>,
        stdout: Box<dyn Stdout>,
        diag: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow>;
}

/// Builds a builtin command from its argument list.
///
/// One factory per registered builtin; the registry scans them in
/// registration order and the first name match wins.
pub trait CommandFactory: Send + Sync {
    /// Canonical name the factory is registered under.
    fn name(&self) -> &'static str;

    /// Parse `args` (everything after the command name) into an executable
    /// command. Parse failures yield a command that reports them when run.
    fn create(&self, args: &[&str]) -> Box<dyn ExecutableCommand>;
}
