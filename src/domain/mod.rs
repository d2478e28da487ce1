//! Domain Layer
//!
//! Pure types and rules for the scaffold and redaction workflows.
//!
//! ## Structure
//!
//! - `entities/` - Theme layout, template files, replacement rules
//! - `value_objects/` - Repository slugs, credentials, fingerprints
//! - `services/` - Deterministic theme rendering
//! - `ports/` - Interfaces for every external collaborator
//!
//! Nothing in this layer spawns a process or touches the network.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
