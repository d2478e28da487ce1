//! Redact Use Case
//!
//! Rewrites the full history of a remote repository so a leaked secret is
//! replaced by a placeholder in every revision, then force-publishes the
//! rewritten mirror to the same remote.

mod options;
mod result;
mod use_case;


pub use options::RedactOptions;
pub use result::RedactResult;
pub use use_case::{RedactUseCase, CONFIRMATION_PHRASE, CONFIRM_QUESTION, SECRET_PROMPT};
