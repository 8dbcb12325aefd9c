//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_profile;
mod directive_type;
mod layer_type;
mod path_result;
mod type_error;
mod type_pattern;

pub use config_profile::ConfigProfile;
pub use directive_type::DirectiveType;
pub use layer_type::{LayerType, STANDARD_LAYERS};
pub use path_result::{PathKind, PathResult};
pub use type_error::{ParamKind, TypeCreationError};
pub use type_pattern::TypePattern;
