//! Resolve paths use case

use std::path::Path;

use crate::config::{load_profile, Config};
use crate::domain::entities::TwoParams;
use crate::domain::ports::FileSystem;
use crate::domain::services::{
    InputFilePathResolver, OutputFilePathResolver, PathOptions, PathParams,
    PathResolutionError, PromptTemplatePathResolver, SchemaFilePathResolver,
};
use crate::domain::value_objects::ConfigProfile;
use crate::error::BreakdownResult;
use crate::infrastructure::ConfigPatternProvider;

use super::options::ResolveRequest;
use super::result::{ResolveOutcome, ResolvedPaths};

/// Runs the four resolvers against one file system
pub struct ResolvePathsUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> ResolvePathsUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Resolve input, output, prompt and schema paths for validated params.
    ///
    /// Each resolver runs independently; the first error is returned.
    pub fn resolve(
        &self,
        config: &Config,
        params: &TwoParams,
        options: &PathOptions,
    ) -> Result<ResolvedPaths, PathResolutionError> {
        let path_params = PathParams::new(params, options);

        Ok(ResolvedPaths {
            input: InputFilePathResolver::new(&self.fs).resolve(&path_params)?,
            output: OutputFilePathResolver::new(config, &self.fs).resolve(&path_params)?,
            prompt: PromptTemplatePathResolver::new(config, &self.fs).resolve(&path_params)?,
            schema: SchemaFilePathResolver::new(config, &self.fs).resolve(&path_params)?,
        })
    }

    /// Load the profile from `config_dir`, validate the request and resolve.
    pub fn execute(
        &self,
        config_dir: &Path,
        request: &ResolveRequest,
    ) -> BreakdownResult<ResolveOutcome> {
        let profile = ConfigProfile::from_cli_option(request.profile.as_deref());
        let loaded = load_profile(config_dir, &profile)?;

        let provider = ConfigPatternProvider::from_config_or_default(&loaded.config);
        let params = TwoParams::create(&request.directive, &request.layer, profile, &provider)?;
        let paths = self.resolve(&loaded.config, &params, &request.options)?;

        tracing::debug!(
            command = %params.command_string(),
            profile = %params.profile(),
            "resolved paths"
        );

        Ok(ResolveOutcome {
            command: params.to_command(),
            params,
            paths,
            warnings: loaded.warnings,
        })
    }
}
