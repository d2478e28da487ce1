//! Hosting Session Port
//!
//! The hosting provider's command-line session (e.g. `gh`). Used
//! invoke-only: check for a session, log in with a token, and register
//! the session as git's credential helper.

use super::CommandResult;
use crate::domain::value_objects::AccessToken;

pub trait HostingSession {
    /// Name of the tool behind this session (for messages)
    fn name(&self) -> &'static str;

    /// Whether an authenticated session is active right now
    fn is_active(&self) -> bool;

    /// Establish a session from `token`. The token must never be written
    /// to disk or passed as a process argument.
    fn login(&self, token: &AccessToken) -> CommandResult<()>;

    /// Let git authenticate through this session
    fn setup_git(&self) -> CommandResult<()>;
}
