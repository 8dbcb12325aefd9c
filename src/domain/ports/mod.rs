//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod pattern_provider;

pub use file_system::FileSystem;
pub use pattern_provider::{PatternStatus, TypePatternProvider};
