//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Mentor Configuration
# Only override what you want to change -- missing fields use defaults.
#
# The API key is never read from this file. Set API_KEY (or VITE_API_KEY)
# in the environment or in a .env file.

[model]
# name = "gemini-3-flash-preview"
# temperature = 0.7            # 0.0-2.0
# max_output_tokens = 2000     # 1-65536
# mind_map_temperature = 0.4   # 0.0-2.0

[logging]
# level = "INFO"               # DEBUG, INFO, WARNING, ERROR
"##
}
