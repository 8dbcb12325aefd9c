//! breakdown - parameter validation and path resolution
//!
//! Validates the two positional arguments of a breakdown command (directive
//! and layer) against profile-specific patterns, then resolves the input,
//! output, prompt template and schema paths the command works with.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{ResolveOutcome, ResolvePathsUseCase, ResolveRequest, ResolvedPaths};
pub use config::{Config, ConfigError};
pub use domain::entities::{BreakdownCommand, TwoParams, TwoParamsError};
pub use domain::ports::{FileSystem, PatternStatus, TypePatternProvider};
pub use domain::services::{
    InputFilePathResolver, OutputFilePathResolver, PathOptions, PathParams, PathResolutionError,
    PromptTemplatePathResolver, SchemaFilePathResolver, TypeFactory,
};
pub use domain::value_objects::{
    ConfigProfile, DirectiveType, LayerType, ParamKind, PathKind, PathResult, TypeCreationError,
    TypePattern,
};
pub use error::{BreakdownError, BreakdownResult};
pub use infrastructure::{ConfigPatternProvider, DefaultPatternProvider, LocalFs, RootedFs};
