use crate::builtin::{Cd, Exit, Help};
use crate::command::CommandFactory;
use once_cell::sync::Lazy;

/// Zero-sized factory for a single builtin type.
///
/// Holding the builtin as a type parameter keeps registration down to one
/// line per command.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// The fixed, ordered table of builtins.
///
/// Built once on first use and scanned linearly on every dispatch; with
/// three entries a smarter structure would buy nothing. The first name
/// match wins, so registration order is also precedence order.
pub struct Registry {
    factories: Vec<Box<dyn CommandFactory>>,
}

impl Registry {
    fn new(factories: Vec<Box<dyn CommandFactory>>) -> Self {
        Self { factories }
    }

    /// Finds the factory registered under `name`, comparing the whole name
    /// for equality. No prefixes, no case folding.
    pub fn lookup(&self, name: &str) -> Option<&dyn CommandFactory> {
        self.factories
            .iter()
            .find(|factory| factory.name() == name)
            .map(|factory| factory.as_ref())
    }

    /// Builtin names in registration order, the order `help` prints them.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.iter().map(|factory| factory.name())
    }
}

/// The interpreter's builtin table. Adding a command means adding one line
/// here; lookup and `help` pick it up from the same place.
pub static BUILTINS: Lazy<Registry> = Lazy::new(|| {
    Registry::new(vec![
        Box::new(Factory::<Cd>::default()),
        Box::new(Factory::<Help>::default()),
        Box::new(Factory::<Exit>::default()),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Flow;
    use crate::env::Environment;
    use crate::io::MemWriter;

    #[test]
    fn test_names_follow_registration_order() {
        let names: Vec<&str> = BUILTINS.names().collect();
        assert_eq!(names, ["cd", "help", "exit"]);
    }

    #[test]
    fn test_lookup_matches_whole_names_only() {
        assert!(BUILTINS.lookup("cd").is_some());
        assert!(BUILTINS.lookup("help").is_some());
        assert!(BUILTINS.lookup("exit").is_some());

        assert!(BUILTINS.lookup("c").is_none());
        assert!(BUILTINS.lookup("cdd").is_none());
        assert!(BUILTINS.lookup("CD").is_none());
        assert!(BUILTINS.lookup("").is_none());
    }

    #[test]
    fn test_factory_turns_bad_arguments_into_a_diagnostic() {
        let factory = BUILTINS.lookup("cd").unwrap();
        let cmd = factory.create(&["one", "two"]);

        let (out, out_handle) = MemWriter::with_handle();
        let mut diag = Vec::new();
        let mut env = Environment::new();
        let flow = cmd
            .execute(Box::new(out), &mut diag, &mut env)
            .expect("a parse failure must degrade to a report, not an error");

        assert_eq!(flow, Flow::Continue);
        assert!(out_handle.borrow().is_empty());
        assert!(!diag.is_empty());
    }

    #[test]
    fn test_factory_help_flag_is_not_an_error() {
        let factory = BUILTINS.lookup("cd").unwrap();
        let cmd = factory.create(&["--help"]);

        let (out, out_handle) = MemWriter::with_handle();
        let mut diag = Vec::new();
        let mut env = Environment::new();
        let flow = cmd
            .execute(Box::new(out), &mut diag, &mut env)
            .expect("--help must not fail");

        assert_eq!(flow, Flow::Continue);
        assert!(!out_handle.borrow().is_empty());
        assert!(diag.is_empty());
    }

    #[test]
    fn test_factory_exit_accepts_flag_like_arguments() {
        let factory = BUILTINS.lookup("exit").unwrap();
        let cmd = factory.create(&["--help", "-n"]);

        let (out, out_handle) = MemWriter::with_handle();
        let mut diag = Vec::new();
        let mut env = Environment::new();
        let flow = cmd
            .execute(Box::new(out), &mut diag, &mut env)
            .expect("exit must run whatever its arguments");

        assert_eq!(flow, Flow::Exit);
        assert!(out_handle.borrow().is_empty());
        assert!(diag.is_empty());
    }

    #[test]
    fn test_factory_help_accepts_flag_like_arguments() {
        let factory = BUILTINS.lookup("help").unwrap();
        let cmd = factory.create(&["--help", "-x"]);

        let (out, out_handle) = MemWriter::with_handle();
        let mut diag = Vec::new();
        let mut env = Environment::new();
        let flow = cmd
            .execute(Box::new(out), &mut diag, &mut env)
            .expect("help must run whatever its arguments");

        assert_eq!(flow, Flow::Continue);
        let text = String::from_utf8(out_handle.borrow().clone()).unwrap();
        assert!(text.starts_with("msh: a minimal command interpreter"));
        assert!(diag.is_empty());
    }
}
