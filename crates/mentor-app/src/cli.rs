use clap::Parser;

/// Mentor — a no-nonsense action coach in your terminal, backed by Gemini.
#[derive(Parser, Debug)]
#[command(name = "mentor", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override (e.g. debug, or mentor_ai=debug).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "mentor",
            "--config",
            "/tmp/mentor.toml",
            "--log-level",
            "debug",
            "--print-config",
        ])
        .unwrap();
        assert_eq!(args.config.as_deref(), Some("/tmp/mentor.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.print_config);
    }

    #[test]
    fn defaults_are_empty() {
        let args = Args::try_parse_from(["mentor"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(!args.print_config);
    }
}
