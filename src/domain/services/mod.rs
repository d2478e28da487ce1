//! Domain Services
//!
//! Stateless logic with no I/O.

pub mod theme_renderer;

pub use theme_renderer::render as render_theme;
