//! Full configuration validation.
//!
//! Checks numeric ranges and required strings, collecting every problem
//! into a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::MentorConfig;
use helpers::{validate_not_blank, validate_range, validate_range_f64};
use mentor_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MentorConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_model(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_model(errors: &mut Vec<String>, config: &MentorConfig) {
    let model = &config.model;
    validate_not_blank(errors, "model.name", &model.name);
    validate_range_f64(errors, "model.temperature", model.temperature, 0.0, 2.0);
    validate_range(
        errors,
        "model.max_output_tokens",
        model.max_output_tokens,
        1,
        65_536,
    );
    validate_range_f64(
        errors,
        "model.mind_map_temperature",
        model.mind_map_temperature,
        0.0,
        2.0,
    );
}
