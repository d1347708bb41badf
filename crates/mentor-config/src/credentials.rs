//! Gemini API key resolution.
//!
//! Resolution order:
//! 1. `API_KEY` env var (hosted runtime)
//! 2. `VITE_API_KEY` env var (build-tool name, kept for existing `.env` files)
//! 3. Either name as captured by `option_env!` when the crate was compiled
//!
//! The first non-blank value wins. Values are trimmed.

use std::fmt;

use tracing::debug;

/// Primary environment variable holding the API key.
pub const PRIMARY_ENV: &str = "API_KEY";
/// Fallback environment variable holding the API key.
pub const FALLBACK_ENV: &str = "VITE_API_KEY";

/// A place the API key may be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Process environment variable, read at lookup time.
    Env(&'static str),
    /// Value baked in at compile time.
    BuildTime {
        name: &'static str,
        value: Option<&'static str>,
    },
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Env(name) => write!(f, "env:{name}"),
            CredentialSource::BuildTime { name, .. } => write!(f, "build:{name}"),
        }
    }
}

/// Ordered list of credential sources.
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    sources: Vec<CredentialSource>,
}

impl CredentialResolver {
    pub fn new(sources: Vec<CredentialSource>) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> &[CredentialSource] {
        &self.sources
    }

    /// Resolve against the real process environment.
    pub fn resolve(&self) -> Option<String> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve using `lookup` for environment reads.
    pub fn resolve_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.sources.iter().find_map(|source| {
            let raw = match source {
                CredentialSource::Env(name) => lookup(name),
                CredentialSource::BuildTime { value, .. } => value.map(str::to_string),
            };
            let key = raw
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())?;
            debug!(%source, "API key resolved");
            Some(key)
        })
    }
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::new(vec![
            CredentialSource::Env(PRIMARY_ENV),
            CredentialSource::Env(FALLBACK_ENV),
            CredentialSource::BuildTime {
                name: PRIMARY_ENV,
                value: option_env!("API_KEY"),
            },
            CredentialSource::BuildTime {
                name: FALLBACK_ENV,
                value: option_env!("VITE_API_KEY"),
            },
        ])
    }
}

/// Resolve the API key from the default sources.
pub fn resolve_api_key() -> Option<String> {
    CredentialResolver::default().resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn env_only() -> CredentialResolver {
        CredentialResolver::new(vec![
            CredentialSource::Env(PRIMARY_ENV),
            CredentialSource::Env(FALLBACK_ENV),
        ])
    }

    #[test]
    fn primary_wins_over_fallback() {
        let vars = env(&[("API_KEY", "primary"), ("VITE_API_KEY", "fallback")]);
        let key = env_only().resolve_with(|name| vars.get(name).cloned());
        assert_eq!(key.as_deref(), Some("primary"));
    }

    #[test]
    fn falls_back_to_vite_name() {
        let vars = env(&[("VITE_API_KEY", "fallback")]);
        let key = env_only().resolve_with(|name| vars.get(name).cloned());
        assert_eq!(key.as_deref(), Some("fallback"));
    }

    #[test]
    fn blank_values_are_skipped() {
        let vars = env(&[("API_KEY", "   "), ("VITE_API_KEY", " key \n")]);
        let key = env_only().resolve_with(|name| vars.get(name).cloned());
        assert_eq!(key.as_deref(), Some("key"));
    }

    #[test]
    fn nothing_set_is_absent() {
        assert_eq!(env_only().resolve_with(|_| None), None);
    }

    #[test]
    fn build_time_value_used_last() {
        let resolver = CredentialResolver::new(vec![
            CredentialSource::Env(PRIMARY_ENV),
            CredentialSource::BuildTime {
                name: PRIMARY_ENV,
                value: Some("baked"),
            },
        ]);
        assert_eq!(resolver.resolve_with(|_| None).as_deref(), Some("baked"));

        let vars = env(&[("API_KEY", "runtime")]);
        let key = resolver.resolve_with(|name| vars.get(name).cloned());
        assert_eq!(key.as_deref(), Some("runtime"));
    }

    #[test]
    fn default_order_is_runtime_then_build_time() {
        let resolver = CredentialResolver::default();
        let names: Vec<String> = resolver.sources().iter().map(|s| s.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "env:API_KEY",
                "env:VITE_API_KEY",
                "build:API_KEY",
                "build:VITE_API_KEY"
            ]
        );
    }
}
