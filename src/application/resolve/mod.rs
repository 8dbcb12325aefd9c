//! Resolve Use Case
//!
//! Loads the profile config, validates the two positional parameters and
//! runs the four path resolvers.

mod options;
mod result;
mod use_case;

pub use options::ResolveRequest;
pub use result::{ResolveOutcome, ResolvedPaths};
pub use use_case::ResolvePathsUseCase;
