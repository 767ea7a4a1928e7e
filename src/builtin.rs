//! Commands the interpreter runs in-process instead of spawning a program.
//!
//! Each builtin owns its argument handling: `cd` parses with [`argh`] and
//! bad arguments come back as the usual usage text, while `help` and
//! `exit` run the same way no matter what follows their name.

use crate::command::{CommandFactory, ExecutableCommand, Flow, Stdout};
use crate::env::Environment;
use crate::registry::{BUILTINS, Factory};
use anyhow::{Context, Result};
use argh::FromArgs;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// A command known to the interpreter at compile time, run in-process with
/// no child spawned.
pub(crate) trait BuiltinCommand: Sized {
    /// Canonical name of the command, e.g. "cd".
    fn name() -> &'static str;

    /// Builds the command from the tokens after its name.
    fn parse(args: &[&str]) -> Result<Self, InvalidArgs>;

    /// Executes the command against the interpreter state.
    ///
    /// An `Err` is a user-visible failure; the dispatcher reports it on the
    /// diagnostic stream and keeps the loop running.
    fn execute(
        self,
        stdout: &mut dyn Write,
        diag: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(
        self: Box<Self>,
        mut stdout: Box<dyn Stdout>,
        diag: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        T::execute(*self, &mut stdout, diag, env)
    }
}

/// Produced when argument parsing stops early: either a genuine usage error
/// or the text argh generates for `--help`.
pub(crate) struct InvalidArgs {
    output: String,
    is_error: bool,
}

impl ExecutableCommand for InvalidArgs {
    fn execute(
        self: Box<Self>,
        mut stdout: Box<dyn Stdout>,
        diag: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<Flow> {
        if self.is_error {
            diag.write_all(self.output.as_bytes())?;
        } else {
            stdout.write_all(self.output.as_bytes())?;
        }
        Ok(Flow::Continue)
    }
}

impl<T: BuiltinCommand + Send + Sync + 'static> CommandFactory for Factory<T> {
    fn name(&self) -> &'static str {
        T::name()
    }

    fn create(&self, args: &[&str]) -> Box<dyn ExecutableCommand> {
        match T::parse(args) {
            Ok(cmd) => Box::new(cmd),
            Err(report) => Box::new(report),
        }
    }
}

#[derive(FromArgs)]
/// Change the working directory.
pub struct Cd {
    #[argh(positional)]
    /// directory to switch to, absolute or relative to the current one.
    pub target: Option<String>,
}

impl BuiltinCommand for Cd {
    fn name() -> &'static str {
        "cd"
    }

    fn parse(args: &[&str]) -> Result<Self, InvalidArgs> {
        Self::from_args(&[Self::name()], args).map_err(|exit| InvalidArgs {
            output: exit.output,
            is_error: exit.status.is_err(),
        })
    }

    fn execute(
        self,
        _stdout: &mut dyn Write,
        _diag: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Flow> {
        let target = match self.target {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => return Err(anyhow::anyhow!(r#"expected argument to "cd""#)),
        };

        let requested = if target.is_absolute() {
            target
        } else {
            env.current_dir.join(target)
        };

        let resolved = fs::canonicalize(&requested)
            .with_context(|| format!("cd: {}", requested.display()))?;
        env::set_current_dir(&resolved)
            .with_context(|| format!("cd: {}", resolved.display()))?;
        env.current_dir = resolved;
        Ok(Flow::Continue)
    }
}

/// Prints the usage banner and the builtin table. Anything after the name
/// is ignored, flags included.
pub struct Help;

impl BuiltinCommand for Help {
    fn name() -> &'static str {
        "help"
    }

    fn parse(_args: &[&str]) -> Result<Self, InvalidArgs> {
        Ok(Help)
    }

    fn execute(
        self,
        stdout: &mut dyn Write,
        _diag: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<Flow> {
        writeln!(stdout, "msh: a minimal command interpreter")?;
        writeln!(stdout, "Type program names and arguments, and hit enter.")?;
        writeln!(stdout, "The following are built in:")?;
        for name in BUILTINS.names() {
            writeln!(stdout, "  {name}")?;
        }
        writeln!(stdout, "Use the man command for information on other programs.")?;
        Ok(Flow::Continue)
    }
}

/// Leaves the interpreter. Anything after the name is ignored, flags
/// included.
pub struct Exit;

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn parse(_args: &[&str]) -> Result<Self, InvalidArgs> {
        Ok(Exit)
    }

    fn execute(
        self,
        _stdout: &mut dyn Write,
        _diag: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<Flow> {
        Ok(Flow::Exit)
    }
}
