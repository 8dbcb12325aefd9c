//! TwoParams aggregate
//!
//! A validated directive and layer plus the profile they were validated
//! under. All fields are fixed at construction; derived values (command
//! string, template paths, command record) are computed on every call.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::ports::TypePatternProvider;
use crate::domain::services::template_path::{prompt_relative_path, schema_relative_path};
use crate::domain::services::TypeFactory;
use crate::domain::value_objects::{ConfigProfile, DirectiveType, LayerType, TypeCreationError};

/// Name reported in [`BreakdownCommand::command`]
pub const COMMAND_NAME: &str = "breakdown";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TwoParamsError {
    #[error("invalid directive: {0}")]
    InvalidDirective(#[source] TypeCreationError),

    #[error("invalid layer: {0}")]
    InvalidLayer(#[source] TypeCreationError),
}

impl TwoParamsError {
    pub fn cause(&self) -> &TypeCreationError {
        match self {
            TwoParamsError::InvalidDirective(cause) | TwoParamsError::InvalidLayer(cause) => cause,
        }
    }
}

/// Plain record handed to logging and telemetry collaborators
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownCommand {
    pub command: &'static str,
    pub directive: String,
    pub layer: String,
    pub profile: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoParams {
    directive: DirectiveType,
    layer: LayerType,
    profile: ConfigProfile,
}

impl TwoParams {
    /// Validate the directive, then the layer, under `profile`.
    ///
    /// Stops at the first failure, so a bad directive hides a bad layer.
    pub fn create<P: TypePatternProvider>(
        raw_directive: &str,
        raw_layer: &str,
        profile: ConfigProfile,
        provider: P,
    ) -> Result<Self, TwoParamsError> {
        let factory = TypeFactory::with_profile(provider, profile);
        let directive = factory
            .create_directive(raw_directive)
            .map_err(TwoParamsError::InvalidDirective)?;
        let layer = factory
            .create_layer(raw_layer)
            .map_err(TwoParamsError::InvalidLayer)?;

        Ok(Self {
            directive,
            layer,
            profile: factory.profile().clone(),
        })
    }

    /// [`create`](Self::create) with the raw `--config` option value;
    /// absent or blank profiles become `default`.
    pub fn create_with_cli_option<P: TypePatternProvider>(
        raw_directive: &str,
        raw_layer: &str,
        profile: Option<&str>,
        provider: P,
    ) -> Result<Self, TwoParamsError> {
        Self::create(
            raw_directive,
            raw_layer,
            ConfigProfile::from_cli_option(profile),
            provider,
        )
    }

    pub fn directive(&self) -> &DirectiveType {
        &self.directive
    }

    pub fn layer(&self) -> &LayerType {
        &self.layer
    }

    pub fn profile(&self) -> &ConfigProfile {
        &self.profile
    }

    /// Re-check both components against the patterns they were built with
    pub fn validate(&self) -> Result<(), TwoParamsError> {
        self.directive
            .revalidate()
            .map_err(TwoParamsError::InvalidDirective)?;
        self.layer
            .revalidate()
            .map_err(TwoParamsError::InvalidLayer)
    }

    /// Structural equality over directive, layer and profile
    pub fn equals(&self, other: &TwoParams) -> bool {
        self == other
    }

    /// `"{directive} {layer}"`
    pub fn command_string(&self) -> String {
        format!("{} {}", self.directive.value(), self.layer.value())
    }

    pub fn debug_string(&self) -> String {
        format!(
            "TwoParams(directive=\"{}\", layer=\"{}\", profile=\"{}\")",
            self.directive.value(),
            self.layer.value(),
            self.profile.value()
        )
    }

    /// Command record with a timestamp captured now
    pub fn to_command(&self) -> BreakdownCommand {
        BreakdownCommand {
            command: COMMAND_NAME,
            directive: self.directive.value().to_string(),
            layer: self.layer.value().to_string(),
            profile: self.profile.value().to_string(),
            timestamp: Utc::now(),
        }
    }

    /// `{directive}/{layer}/f_{from_layer or layer}.md`
    pub fn prompt_path(&self, from_layer: Option<&str>) -> PathBuf {
        let layer = self.layer.value();
        prompt_relative_path(
            self.directive.value(),
            layer,
            from_layer.unwrap_or(layer),
            None,
        )
    }

    /// `{directive}/{layer}/f_{layer}.schema.json`
    pub fn schema_path(&self) -> PathBuf {
        schema_relative_path(self.directive.value(), self.layer.value())
    }

    pub fn resolve_prompt_file_path(&self, base_dir: &Path, from_layer: Option<&str>) -> PathBuf {
        base_dir.join(self.prompt_path(from_layer))
    }

    pub fn resolve_schema_file_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(self.schema_path())
    }
}

#[cfg(test)]
mod tests;
