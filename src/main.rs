use msh::Interpreter;
use msh::reader::TerminalReader;

fn main() -> anyhow::Result<()> {
    let mut reader = TerminalReader::new()?;
    Interpreter::new().repl(&mut reader)
}
