//! Operator Prompt Port
//!
//! Asks the operator a question and returns the raw answer. Callers decide
//! what counts as acknowledgment.

use std::io;

pub trait OperatorPrompt {
    fn ask(&self, question: &str) -> io::Result<String>;
}
