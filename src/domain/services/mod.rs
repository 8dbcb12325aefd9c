//! Domain Services
//!
//! - `TypeFactory` - raw tokens → validated directive/layer
//! - path resolvers - validated params + config → classified file paths
//!
//! The four resolvers are siblings: none of them calls another. Shared naming
//! and path plumbing live in `template_path` and `path_support`.

mod input_path;
mod output_path;
mod path_options;
mod path_support;
mod prompt_path;
mod schema_path;
pub mod template_path;
#[cfg(test)]
pub(crate) mod test_support;
mod type_factory;

pub use input_path::{infer_from_layer, InputFilePathResolver, STDIN_MARKER};
pub use output_path::{generate_file_name, OutputFilePathResolver, GENERATED_HASH_LEN};
pub use path_options::{PathOptions, PathParams};
pub use path_support::{
    check_name_segment, check_path_chars, expand_home, normalize_separators, resolve_base_dir,
    PathResolutionError, DISALLOWED_PATH_CHARS,
};
pub use prompt_path::PromptTemplatePathResolver;
pub use schema_path::SchemaFilePathResolver;
pub use type_factory::{PatternAvailability, TypeFactory, TypePair};
