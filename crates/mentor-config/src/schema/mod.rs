//! Configuration schema types for Mentor.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod model;
mod system;

pub use model::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Mentor.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MentorConfig {
    pub model: ModelConfig,
    pub logging: LoggingConfig,
}
