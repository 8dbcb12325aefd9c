//! Template file naming
//!
//! Prompt and schema files live at `{base_dir}/{directive}/{layer}/{filename}`:
//! - prompt: `f_{from_layer}.md`, or `f_{from_layer}_{adaptation}.md` when adapted
//! - schema: `f_{layer}.schema.json`

use std::path::{Path, PathBuf};

pub const FILE_PREFIX: &str = "f_";
pub const PROMPT_EXTENSION: &str = ".md";
pub const SCHEMA_SUFFIX: &str = ".schema.json";

pub fn prompt_file_name(from_layer: &str, adaptation: Option<&str>) -> String {
    match adaptation {
        Some(adaptation) => format!("{FILE_PREFIX}{from_layer}_{adaptation}{PROMPT_EXTENSION}"),
        None => format!("{FILE_PREFIX}{from_layer}{PROMPT_EXTENSION}"),
    }
}

pub fn schema_file_name(layer: &str) -> String {
    format!("{FILE_PREFIX}{layer}{SCHEMA_SUFFIX}")
}

/// `{directive}/{layer}`
pub fn template_dir(directive: &str, layer: &str) -> PathBuf {
    Path::new(directive).join(layer)
}

/// `{directive}/{layer}/f_{from_layer}[_{adaptation}].md`
pub fn prompt_relative_path(
    directive: &str,
    layer: &str,
    from_layer: &str,
    adaptation: Option<&str>,
) -> PathBuf {
    template_dir(directive, layer).join(prompt_file_name(from_layer, adaptation))
}

/// `{directive}/{layer}/f_{layer}.schema.json`
pub fn schema_relative_path(directive: &str, layer: &str) -> PathBuf {
    template_dir(directive, layer).join(schema_file_name(layer))
}
