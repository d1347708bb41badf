mod chat;
mod cli;
mod command;
mod image;

use std::path::{Path, PathBuf};

use mentor_ai::{Mentor, MentorSettings};
use mentor_config::MentorConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// `.env` locations in lookup order: the workspace root, then the current
/// directory.
fn dotenv_candidates(manifest_dir: &Path) -> [PathBuf; 2] {
    [
        // Two levels up from crates/mentor-app/
        manifest_dir.join("..").join("..").join(".env"),
        PathBuf::from(".env"),
    ]
}

/// Load KEY=VALUE lines from the first `.env` found in
/// [`dotenv_candidates`].
///
/// Variables already set in the process environment are left alone.
fn load_dotenv() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    for path in &dotenv_candidates(&manifest_dir) {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for (key, value) in parse_dotenv(&contents) {
                if std::env::var(key).is_err() {
                    std::env::set_var(key, value);
                }
            }
            return;
        }
    }
}

fn parse_dotenv(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let key = key.trim().trim_start_matches("export ").trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key, value)
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

fn init_logging(directives: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        directives
            .split(',')
            .filter_map(|d| d.trim().parse::<Directive>().ok())
            .fold(EnvFilter::new("warn"), |filter, d| filter.add_directive(d))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Directive for our own crates at `level`. Targets match by prefix, so
/// `mentor` covers the binary, `mentor_ai`, and `mentor_config`.
fn default_directives(level: &str) -> String {
    format!("mentor={level}")
}

fn mentor_settings(config: &MentorConfig) -> MentorSettings {
    MentorSettings::default()
        .with_model(config.model.name.clone())
        .with_temperature(config.model.temperature)
        .with_max_output_tokens(config.model.max_output_tokens)
        .with_mind_map_temperature(config.model.mind_map_temperature)
}

fn main() {
    // Load .env file before anything reads the environment
    load_dotenv();

    let args = cli::parse();

    let loaded = match args.config {
        Some(ref path) => mentor_config::load_config_from(Path::new(path)),
        None => mentor_config::load_config(),
    };

    let directives = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => default_directives(config.logging.level.as_directive()),
        (None, Err(_)) => default_directives("info"),
    };
    init_logging(&directives);

    tracing::info!("Mentor v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        MentorConfig::default()
    });

    if args.print_config {
        println!("{}", mentor_config::config_to_json(&config));
        return;
    }

    let api_key = mentor_config::resolve_api_key();
    if api_key.is_none() {
        tracing::warn!("API key not found in API_KEY or VITE_API_KEY");
    }
    let mentor = Mentor::new(api_key, mentor_settings(&config));
    tracing::info!(model = %config.model.name, connected = mentor.is_connected(), "mentor ready");

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(chat::run(mentor)) {
        tracing::error!("Chat loop error: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
