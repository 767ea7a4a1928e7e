use crate::command::{ExecutableCommand, Flow, Stdout};
use crate::env::Environment;
use crate::external::ExternalCommand;
use crate::io::InheritedStdout;
use crate::lexer;
use crate::reader::{LineReader, ReadOutcome};
use crate::registry::BUILTINS;
use anyhow::Result;
use std::io::{self, Write};

/// Shown before every read. The loop owns it and hands it to the reader,
/// which has to redraw it during editing.
pub(crate) const PROMPT: &str = "> ";

/// The interactive command interpreter.
///
/// Reads one line at a time, splits it into whitespace-delimited tokens and
/// runs the result: a builtin in-process, anything else as a child process
/// that is waited for. Errors never escape an iteration; they are printed
/// with an `msh: ` prefix and the next prompt follows.
///
/// # Example
///
/// ```
/// use msh::io::MemWriter;
/// use msh::{Flow, Interpreter};
///
/// let mut sh = Interpreter::default();
/// let (out, captured) = MemWriter::with_handle();
/// let mut diag = Vec::new();
///
/// let flow = sh.eval_line("help", Box::new(out), &mut diag);
///
/// assert_eq!(flow, Flow::Continue);
/// assert!(String::from_utf8_lossy(&captured.borrow()).contains("cd"));
/// assert!(diag.is_empty());
/// ```
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    /// An interpreter rooted in the current working directory.
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// Tokenizes one line and dispatches it.
    pub fn eval_line(&mut self, line: &str, stdout: Box<dyn Stdout>, diag: &mut dyn Write) -> Flow {
        let tokens = lexer::split_line(line);
        self.execute(&tokens, stdout, diag)
    }

    /// Dispatches one token sequence: nothing for an empty one, a builtin
    /// when the first token matches the registry, a child process otherwise.
    ///
    /// This is the single place errors are absorbed. Whatever a command
    /// returns as `Err` ends up on `diag` behind the `msh: ` prefix, and the
    /// answer is still `Continue`.
    pub fn execute(
        &mut self,
        tokens: &[String],
        stdout: Box<dyn Stdout>,
        diag: &mut dyn Write,
    ) -> Flow {
        let Some(name) = tokens.first() else {
            return Flow::Continue;
        };
        let args: Vec<&str> = tokens[1..].iter().map(String::as_str).collect();

        let command: Box<dyn ExecutableCommand> = match BUILTINS.lookup(name) {
            Some(factory) => factory.create(&args),
            None => Box::new(ExternalCommand::new(
                name.into(),
                args.iter().map(|arg| arg.into()).collect(),
            )),
        };

        match command.execute(stdout, diag, &mut self.env) {
            Ok(flow) => flow,
            Err(err) => {
                let _ = writeln!(diag, "msh: {err:#}");
                Flow::Continue
            }
        }
    }

    /// Drives the read, tokenize, dispatch cycle until `exit` or
    /// end-of-input. Interrupting the prompt just prompts again.
    ///
    /// Interactive output goes to the inherited stdout and diagnostics to
    /// stderr. An `Err` from the reader is fatal to the session and
    /// propagates to the caller.
    pub fn repl(&mut self, reader: &mut dyn LineReader) -> Result<()> {
        loop {
            match reader.read_line(PROMPT)? {
                ReadOutcome::Line(line) => {
                    let stdout = Box::new(InheritedStdout::new());
                    if self.eval_line(&line, stdout, &mut io::stderr()) == Flow::Exit {
                        break;
                    }
                }
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Eof => break,
            }
        }
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
