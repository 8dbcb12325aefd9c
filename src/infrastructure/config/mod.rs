//! Configuration-backed adapters

mod pattern_provider;

pub use pattern_provider::{
    ConfigPatternProvider, DefaultPatternProvider, DEFAULT_DIRECTIVE_PATTERN,
    DEFAULT_LAYER_PATTERN,
};
