//! Resolve request

use crate::domain::services::PathOptions;

/// Raw CLI input for one resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveRequest {
    pub directive: String,
    pub layer: String,
    /// Raw `--config` value; `None` and blank mean `default`
    pub profile: Option<String>,
    pub options: PathOptions,
}

impl ResolveRequest {
    pub fn new(directive: impl Into<String>, layer: impl Into<String>) -> Self {
        Self {
            directive: directive.into(),
            layer: layer.into(),
            ..Self::default()
        }
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn with_options(mut self, options: PathOptions) -> Self {
        self.options = options;
        self
    }
}
