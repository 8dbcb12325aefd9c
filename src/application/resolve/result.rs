//! Resolve result types

use serde::Serialize;

use crate::config::ConfigWarning;
use crate::domain::entities::{BreakdownCommand, TwoParams};
use crate::domain::value_objects::PathResult;

/// Output of the four resolvers for one parameter pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPaths {
    pub input: PathResult,
    pub output: PathResult,
    pub prompt: PathResult,
    pub schema: PathResult,
}

/// Everything a full resolution produced
#[derive(Debug, Clone)]
pub struct ResolveOutcome {
    pub params: TwoParams,
    pub paths: ResolvedPaths,
    pub command: BreakdownCommand,
    pub warnings: Vec<ConfigWarning>,
}
