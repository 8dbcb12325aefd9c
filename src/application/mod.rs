//! Application Layer
//!
//! Use cases that orchestrate domain services and infrastructure.

pub mod resolve;

pub use resolve::{ResolveOutcome, ResolvePathsUseCase, ResolveRequest, ResolvedPaths};
