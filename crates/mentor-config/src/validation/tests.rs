//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = MentorConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = MentorConfig::default();
    config.model.temperature = 2.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.temperature"));
}

#[test]
fn catches_nan_temperature() {
    let mut config = MentorConfig::default();
    config.model.mind_map_temperature = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.mind_map_temperature"));
}

#[test]
fn catches_zero_max_output_tokens() {
    let mut config = MentorConfig::default();
    config.model.max_output_tokens = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.max_output_tokens"));
}

#[test]
fn catches_blank_model_name() {
    let mut config = MentorConfig::default();
    config.model.name = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.name must not be empty"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = MentorConfig::default();
    config.model.temperature = -1.0;
    config.model.max_output_tokens = 100_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.temperature"));
    assert!(err.contains("model.max_output_tokens"));
    assert!(err.contains("; "));
}
