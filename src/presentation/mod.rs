//! Presentation Layer
//!
//! Creates use cases with infrastructure dependencies. CLI parsing and
//! terminal rendering live in the binary.
//!
//! ## Usage
//!
//! ```ignore
//! use themeops::presentation::factory;
//!
//! let events = factory::create_event_sink("scaffold", false, ConsoleStyle::default());
//! let use_case = factory::create_scaffold_use_case("github.com", events);
//! let result = use_case.execute(&options)?;
//! ```

pub mod factory;

pub use factory::{
    create_check_tools_use_case, create_event_sink, create_redact_use_case,
    create_scaffold_use_case,
};
