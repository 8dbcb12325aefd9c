//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Rooted)
//! - `config/` - Pattern providers backed by configuration

pub mod config;
pub mod fs;

// Re-export for convenience
pub use config::{ConfigPatternProvider, DefaultPatternProvider};
pub use fs::{LocalFs, RootedFs};
