//! Stdin confirmation prompt

use std::io::{self, BufRead, Write};

use crate::domain::ports::OperatorPrompt;

/// Asks on stderr and reads one line from stdin.
///
/// End of input is returned as an empty answer, which no caller accepts
/// as confirmation.
pub struct StdinPrompt;

impl OperatorPrompt for StdinPrompt {
    fn ask(&self, question: &str) -> io::Result<String> {
        ask_with(question, &mut io::stdin().lock(), &mut io::stderr())
    }
}

/// Prompt on `output`, read the answer from `input`
pub fn ask_with<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<String> {
    writeln!(output)?;
    write!(output, "{}: ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_one_line() {
        let mut input = io::Cursor::new(b"yes\nignored\n".to_vec());
        let mut output = Vec::new();

        let answer = ask_with("Continue?", &mut input, &mut output).unwrap();

        assert_eq!(answer, "yes");
        assert!(String::from_utf8(output).unwrap().contains("Continue?: "));
    }

    #[test]
    fn end_of_input_is_empty_answer() {
        let mut input = io::Cursor::new(Vec::new());
        let answer = ask_with("Continue?", &mut input, &mut Vec::new()).unwrap();
        assert_eq!(answer, "");
    }
}
