//! The interactive read-eval-print loop: one line in, one value out, a
//! single [`Environment`] shared across the whole session so bindings and
//! function definitions persist between lines.
use std::io::{self, BufRead, Write};

use log::debug;

use crate::environment::Environment;

const PROMPT: &str = ">> ";

/// Runs the loop against `input`/`output` until EOF or an `exit` line.
/// Parser errors for a line are printed and the line is otherwise ignored;
/// they do not end the session.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let env = Environment::new_root();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let line = line.trim_end();
        if line == "exit" {
            return Ok(());
        }
        if line.is_empty() {
            continue;
        }

        let (program, errors) = crate::parse(line);
        if !errors.is_empty() {
            debug!("{} parser error(s) on line: {line}", errors.len());
            for error in &errors {
                writeln!(output, "\t{error}")?;
            }
            continue;
        }

        let result = crate::eval(&program, &env);
        writeln!(output, "{}", result.inspect())?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> String {
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn echoes_expression_results() {
        let transcript = run("5 + 5\n");
        assert!(transcript.contains("10"));
    }

    #[test]
    fn bindings_persist_across_lines() {
        let transcript = run("jeff's x is 5;\nx\n");
        assert!(transcript.contains('5'));
    }

    #[test]
    fn exit_ends_the_session_without_evaluating() {
        let transcript = run("exit\njeff's x is 5;\n");
        assert_eq!(transcript, PROMPT);
    }

    #[test]
    fn parser_errors_are_reported_inline() {
        let transcript = run("jeff's is 5;\n");
        assert!(transcript.contains("expected next token to be"));
    }
}
