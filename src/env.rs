use std::env as stdenv;
use std::path::PathBuf;

/// Mutable interpreter state that survives across loop iterations.
///
/// The only such state is the working directory: `cd` updates it and
/// external commands run in it. The field mirrors the process-wide working
/// directory and the two are always updated together.
#[derive(Debug, Clone)]
pub struct Environment {
    pub current_dir: PathBuf,
}

impl Environment {
    /// Captures the current process state.
    pub fn new() -> Self {
        let current_dir = stdenv::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self { current_dir }
    }
}

/// Serializes tests that read or change the process working directory.
/// `std::env::set_current_dir` is process-global while tests run in
/// parallel, so every such test must hold this guard.
#[cfg(test)]
pub(crate) fn lock_current_dir() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};
    static MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
    MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
