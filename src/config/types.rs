//! Configuration type definitions
//!
//! Every recognized key is a field here. Missing keys fall back to the
//! documented defaults; nothing downstream reads keys that are not listed.

use serde::{Deserialize, Serialize};

/// Default `working_dir`
pub const DEFAULT_WORKING_DIR: &str = ".agent/breakdown";
/// Default `resource_dir`
pub const DEFAULT_RESOURCE_DIR: &str = ".agent/breakdown/resources";
/// Default `app_prompt.base_dir`
pub const DEFAULT_PROMPT_BASE_DIR: &str = "prompts";
/// Default `app_schema.base_dir`
pub const DEFAULT_SCHEMA_BASE_DIR: &str = "schema";

/// A section holding a single `base_dir` key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseDirConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<String>,
}

impl BaseDirConfig {
    pub fn new(base_dir: impl Into<String>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    /// Configured base dir, ignoring blank values
    pub fn get(&self) -> Option<&str> {
        non_blank(self.base_dir.as_deref())
    }

    fn merge(self, overlay: Self) -> Self {
        Self {
            base_dir: overlay.base_dir.or(self.base_dir),
        }
    }
}

/// `params.two.<kind>` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl PatternConfig {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
        }
    }
}

/// Validation patterns for the two positional parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoParamsConfig {
    #[serde(default)]
    pub directive_type: PatternConfig,

    #[serde(default)]
    pub layer_type: PatternConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamsConfig {
    #[serde(default)]
    pub two: TwoParamsConfig,
}

/// Merged configuration for one profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_dir: Option<String>,

    #[serde(default)]
    pub app_prompt: BaseDirConfig,

    #[serde(default)]
    pub app_schema: BaseDirConfig,

    #[serde(default)]
    pub app_output: BaseDirConfig,

    #[serde(default)]
    pub params: ParamsConfig,
}

impl Config {
    /// Config with only the validation patterns set
    pub fn with_patterns(directive: impl Into<String>, layer: impl Into<String>) -> Self {
        Self {
            params: ParamsConfig {
                two: TwoParamsConfig {
                    directive_type: PatternConfig::new(directive),
                    layer_type: PatternConfig::new(layer),
                },
            },
            ..Self::default()
        }
    }

    pub fn working_dir(&self) -> &str {
        non_blank(self.working_dir.as_deref()).unwrap_or(DEFAULT_WORKING_DIR)
    }

    pub fn resource_dir(&self) -> &str {
        non_blank(self.resource_dir.as_deref()).unwrap_or(DEFAULT_RESOURCE_DIR)
    }

    pub fn prompt_base_dir(&self) -> &str {
        self.app_prompt.get().unwrap_or(DEFAULT_PROMPT_BASE_DIR)
    }

    pub fn schema_base_dir(&self) -> &str {
        self.app_schema.get().unwrap_or(DEFAULT_SCHEMA_BASE_DIR)
    }

    /// Output base dir; `None` means the current working directory
    pub fn output_base_dir(&self) -> Option<&str> {
        self.app_output.get()
    }

    pub fn directive_pattern(&self) -> Option<&str> {
        self.params.two.directive_type.pattern.as_deref()
    }

    pub fn layer_pattern(&self) -> Option<&str> {
        self.params.two.layer_type.pattern.as_deref()
    }

    /// Overlay `overlay` on top of `self`, key by key
    pub fn merge(self, overlay: Config) -> Config {
        Config {
            working_dir: overlay.working_dir.or(self.working_dir),
            resource_dir: overlay.resource_dir.or(self.resource_dir),
            app_prompt: self.app_prompt.merge(overlay.app_prompt),
            app_schema: self.app_schema.merge(overlay.app_schema),
            app_output: self.app_output.merge(overlay.app_output),
            params: ParamsConfig {
                two: TwoParamsConfig {
                    directive_type: PatternConfig {
                        pattern: overlay
                            .params
                            .two
                            .directive_type
                            .pattern
                            .or(self.params.two.directive_type.pattern),
                    },
                    layer_type: PatternConfig {
                        pattern: overlay
                            .params
                            .two
                            .layer_type
                            .pattern
                            .or(self.params.two.layer_type.pattern),
                    },
                },
            },
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
