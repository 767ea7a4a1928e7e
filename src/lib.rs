//! A tiny interactive command interpreter.
//!
//! msh reads one line at a time, splits it into whitespace-delimited tokens
//! and runs the result: `cd`, `help` and `exit` in-process, everything else
//! as a child process that is waited for before the next prompt. One simple
//! command per line; there are no pipelines, no redirection, no quoting and
//! no job control.
//!
//! [`Interpreter`] is the entry point for both embedding and the binary;
//! [`reader::TerminalReader`] feeds it lines from a terminal with editing
//! and history. The [`command`], [`io`] and [`reader`] modules expose the
//! seams tests and embedders plug into.

mod builtin;
pub mod command;
pub mod env;
mod external;
mod interpreter;
pub mod io;
mod lexer;
pub mod reader;
mod registry;

/// Just a convenient re-export of the continuation signal.
pub use command::Flow;

/// Just a convenient re-export of the interactive command runner.
pub use interpreter::Interpreter;
