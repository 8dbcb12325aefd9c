//! Schema file path resolver
//!
//! Resolves `{app_schema.base_dir}/{directive}/{layer}/f_{layer}.schema.json`.

use crate::config::Config;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{PathKind, PathResult};

use super::path_options::PathParams;
use super::path_support::{current_dir, resolve_base_dir, PathResolutionError};
use super::template_path::schema_relative_path;

#[derive(Debug, Clone)]
pub struct SchemaFilePathResolver<'a, F> {
    config: &'a Config,
    fs: F,
}

impl<'a, F: FileSystem> SchemaFilePathResolver<'a, F> {
    pub fn new(config: &'a Config, fs: F) -> Self {
        Self { config, fs }
    }

    pub fn resolve(&self, params: &PathParams<'_>) -> Result<PathResult, PathResolutionError> {
        let cwd = current_dir(&self.fs)?;
        let path = resolve_base_dir(self.config.schema_base_dir(), &cwd).join(
            schema_relative_path(params.directive.value(), params.layer.value()),
        );

        let exists = self.fs.exists(&path);
        if !exists {
            tracing::debug!(path = %path.display(), "schema file not found");
        }

        let kind = if path.is_absolute() {
            PathKind::Absolute
        } else {
            PathKind::Relative
        };
        Ok(PathResult::new(path, kind, exists))
    }
}
