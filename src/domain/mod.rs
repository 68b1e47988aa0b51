//! Domain layer: pure models and errors, no I/O.

pub mod errors;
pub mod models;

pub use errors::{DomainError, DomainResult};
