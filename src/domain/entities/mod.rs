//! Domain Entities
//!
//! - `TwoParams` - validated directive + layer + profile aggregate

mod two_params;

pub use two_params::{BreakdownCommand, TwoParams, TwoParamsError, COMMAND_NAME};
