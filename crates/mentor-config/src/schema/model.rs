//! Generative model configuration.

use serde::{Deserialize, Serialize};

/// Default Gemini model used for chat and mind maps.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Model selection and generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    /// Chat temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Output cap per chat reply (valid range: 1-65536).
    pub max_output_tokens: u32,
    /// Mind map temperature, kept low for rigid tree formatting.
    pub mind_map_temperature: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.into(),
            temperature: 0.7,
            max_output_tokens: 2000,
            mind_map_temperature: 0.4,
        }
    }
}
