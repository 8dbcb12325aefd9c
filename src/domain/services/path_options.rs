//! Option bundle and parameter bundle consumed by the path resolvers

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::TwoParams;
use crate::domain::value_objects::{DirectiveType, LayerType};

/// CLI options that influence path resolution.
///
/// `custom_variables` is carried for the template renderer and never read here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_file: Option<String>,

    /// Alias of `destination_file`; loses when both are set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_layer_type: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_variables: BTreeMap<String, String>,
}

impl PathOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_from_file(mut self, from_file: impl Into<String>) -> Self {
        self.from_file = Some(from_file.into());
        self
    }

    pub fn with_destination_file(mut self, destination: impl Into<String>) -> Self {
        self.destination_file = Some(destination.into());
        self
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_adaptation(mut self, adaptation: impl Into<String>) -> Self {
        self.adaptation = Some(adaptation.into());
        self
    }

    pub fn with_from_layer_type(mut self, from_layer_type: impl Into<String>) -> Self {
        self.from_layer_type = Some(from_layer_type.into());
        self
    }

    pub fn with_custom_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_variables.insert(key.into(), value.into());
        self
    }

    /// `destination_file`, falling back to `output`
    pub fn destination(&self) -> Option<&str> {
        self.destination_file
            .as_deref()
            .or(self.output.as_deref())
    }
}

/// Validated directive and layer plus the options for one resolution
#[derive(Debug, Clone, Copy)]
pub struct PathParams<'a> {
    pub directive: &'a DirectiveType,
    pub layer: &'a LayerType,
    pub options: &'a PathOptions,
}

impl<'a> PathParams<'a> {
    pub fn new(params: &'a TwoParams, options: &'a PathOptions) -> Self {
        Self {
            directive: params.directive(),
            layer: params.layer(),
            options,
        }
    }

    pub fn from_types(
        directive: &'a DirectiveType,
        layer: &'a LayerType,
        options: &'a PathOptions,
    ) -> Self {
        Self {
            directive,
            layer,
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_file_takes_precedence() {
        let options = PathOptions::new()
            .with_output("b.md")
            .with_destination_file("a.md");
        assert_eq!(options.destination(), Some("a.md"));
    }

    #[test]
    fn output_is_alias() {
        let options = PathOptions::new().with_output("b.md");
        assert_eq!(options.destination(), Some("b.md"));
        assert_eq!(PathOptions::new().destination(), None);
    }

    #[test]
    fn custom_variables_are_passthrough() {
        let options = PathOptions::new().with_custom_variable("author", "kim");
        assert_eq!(options.custom_variables.get("author").unwrap(), "kim");
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["custom_variables"]["author"], "kim");
    }
}
