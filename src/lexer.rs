//! Splits one line of input into argument tokens.

/// Token separators: space, tab, carriage return, newline and the bell
/// character.
const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\u{0007}'];

/// Splits a line into owned tokens.
///
/// Runs of delimiters collapse, so no token is ever empty; a line made of
/// nothing but delimiters yields an empty vector. Tokens are copied out, so
/// the caller is free to drop the line right away.
pub fn split_line(line: &str) -> Vec<String> {
    line.split(DELIMITERS)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple_command() {
        assert_eq!(split_line("echo hi there"), vec!["echo", "hi", "there"]);
    }

    #[test]
    fn test_delimiter_runs_collapse() {
        assert_eq!(split_line("ls   -l\t\t/tmp"), vec!["ls", "-l", "/tmp"]);
        assert_eq!(split_line("  cd  /home  "), vec!["cd", "/home"]);
    }

    #[test]
    fn test_line_of_delimiters_yields_no_tokens() {
        assert!(split_line("").is_empty());
        assert!(split_line("   ").is_empty());
        assert!(split_line(" \t\r\n\u{0007} ").is_empty());
    }

    #[test]
    fn test_bell_separates_tokens() {
        assert_eq!(split_line("beep\u{0007}boop"), vec!["beep", "boop"]);
    }

    #[test]
    fn test_tokens_keep_order_and_content() {
        let tokens = split_line("  gcc  -o \t out.bin   main.c ");
        assert_eq!(tokens.join(" "), "gcc -o out.bin main.c");
    }
}
