//! Output adapters for the two ways the interpreter runs: interactively,
//! where children share the terminal, and under test, where output is
//! collected in memory.

use crate::command::Stdout;
use std::cell::RefCell;
use std::io::{Result as IoResult, Write};
use std::process::Stdio;
use std::rc::Rc;

/// Passthrough to the process stdout. Handing it to an external command
/// makes the child inherit the terminal.
pub struct InheritedStdout(std::io::Stdout);

impl InheritedStdout {
    pub fn new() -> Self {
        Self(std::io::stdout())
    }
}

impl Write for InheritedStdout {
    fn write(&mut self, data: &[u8]) -> IoResult<usize> {
        self.0.write(data)
    }

    fn flush(&mut self) -> IoResult<()> {
        self.0.flush()
    }
}

impl Stdout for InheritedStdout {
    fn stdio(self: Box<Self>) -> Stdio {
        Stdio::inherit()
    }
}

/// Memory-backed writer for capturing builtin output in tests and
/// embeddings.
pub struct MemWriter {
    buf: Rc<RefCell<Vec<u8>>>,
}

impl MemWriter {
    pub fn new() -> Self {
        Self {
            buf: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Creates a writer together with a handle to the collected bytes, so
    /// the caller can inspect them after the writer has been consumed.
    pub fn with_handle() -> (Self, Rc<RefCell<Vec<u8>>>) {
        let writer = MemWriter::new();
        let handle = writer.buf.clone();
        (writer, handle)
    }
}

impl Write for MemWriter {
    fn write(&mut self, data: &[u8]) -> IoResult<usize> {
        self.buf.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}

impl Stdout for MemWriter {
    /// An in-memory buffer cannot back a child process; a child handed this
    /// writer gets its stdout discarded. Tests that need to see external
    /// output redirect to a file instead.
    fn stdio(self: Box<Self>) -> Stdio {
        Stdio::null()
    }
}
