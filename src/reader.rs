use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// What a single read attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A complete line, without the terminating newline.
    Line(String),
    /// The prompt was interrupted (Ctrl-C); nothing was read.
    Interrupted,
    /// The input stream ended (Ctrl-D or closed stdin).
    Eof,
}

/// Source of input lines for the interpreter loop.
///
/// The loop owns the prompt text and passes it down, because an editing
/// reader has to redraw the prompt itself.
pub trait LineReader {
    /// Blocks until a line, an interrupt or end-of-input arrives.
    ///
    /// An `Err` is a stream-level failure (the terminal went away); it ends
    /// the whole session, not just one iteration.
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome>;
}

/// Interactive reader backed by a [`rustyline`] editor, which provides line
/// editing and in-memory history.
pub struct TerminalReader {
    editor: DefaultEditor,
}

impl TerminalReader {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineReader for TerminalReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(ReadOutcome::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(err) => Err(err.into()),
        }
    }
}
