//! Prompt template path resolver
//!
//! Resolves `{app_prompt.base_dir}/{directive}/{layer}/f_{from_layer}.md`.
//!
//! `from_layer` is, in order: the `fromLayerType` option, the layer inferred
//! from the input file name, the layer itself. With an `adaptation`, the
//! adapted template `f_{from_layer}_{adaptation}.md` is checked first and the
//! plain template is the fallback.
//!
//! Missing templates are not an error: the fallback path is returned with
//! `exists = false` and the renderer reports the missing file.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{PathKind, PathResult};

use super::input_path::infer_from_layer;
use super::path_options::PathParams;
use super::path_support::{
    check_name_segment, current_dir, resolve_base_dir, PathResolutionError,
};
use super::template_path::{prompt_file_name, template_dir};

#[derive(Debug, Clone)]
pub struct PromptTemplatePathResolver<'a, F> {
    config: &'a Config,
    fs: F,
}

impl<'a, F: FileSystem> PromptTemplatePathResolver<'a, F> {
    pub fn new(config: &'a Config, fs: F) -> Self {
        Self { config, fs }
    }

    pub fn resolve(&self, params: &PathParams<'_>) -> Result<PathResult, PathResolutionError> {
        let adaptation = check_name_segment("adaptation", params.options.adaptation.as_deref())?;
        let from_layer = self.from_layer(params)?;

        let cwd = current_dir(&self.fs)?;
        let dir = resolve_base_dir(self.config.prompt_base_dir(), &cwd)
            .join(template_dir(params.directive.value(), params.layer.value()));

        if let Some(adaptation) = adaptation {
            let adapted = dir.join(prompt_file_name(from_layer, Some(adaptation)));
            if self.fs.exists(&adapted) {
                return Ok(classify(adapted, true));
            }
            tracing::debug!(
                adapted = %adapted.display(),
                "adapted prompt not found, falling back"
            );
        }

        let fallback = dir.join(prompt_file_name(from_layer, None));
        let exists = self.fs.exists(&fallback);
        if !exists {
            tracing::debug!(path = %fallback.display(), "prompt template not found");
        }
        Ok(classify(fallback, exists))
    }

    fn from_layer<'p>(&self, params: &PathParams<'p>) -> Result<&'p str, PathResolutionError> {
        if let Some(explicit) =
            check_name_segment("fromLayerType", params.options.from_layer_type.as_deref())?
        {
            return Ok(explicit);
        }

        let inferred = params
            .options
            .from_file
            .as_deref()
            .and_then(infer_from_layer);
        Ok(inferred.unwrap_or(params.layer.value()))
    }
}

fn classify(path: PathBuf, exists: bool) -> PathResult {
    let kind = if path.is_absolute() {
        PathKind::Absolute
    } else {
        PathKind::Relative
    };
    PathResult::new(path, kind, exists)
}
