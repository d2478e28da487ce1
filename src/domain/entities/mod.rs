//! Domain Entities
//!
//! - `ThemeLayout` - The fixed shape of a scaffolded theme directory
//! - `TemplateFile` - A generated file with deterministic content
//! - `ReplacementRule` - A secret/placeholder pair applied across history

pub mod replacement_rule;
mod template_file;
pub mod theme_layout;

pub use replacement_rule::ReplacementRule;
pub use template_file::TemplateFile;
pub use theme_layout::{ThemeDir, ThemeLayout};
