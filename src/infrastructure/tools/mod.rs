//! External tool adapters
//!
//! Each adapter shells out to one program and reports only success or
//! failure through the domain ports.

mod filter_repo;
mod gh;
mod git;
mod locator;
pub mod process;
#[cfg(test)]
mod test_repo;
mod zip;

pub use filter_repo::FilterRepo;
pub use gh::GhCliSession;
pub use git::GitCli;
pub use locator::PathToolLocator;
pub use zip::ZipCli;
