use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Timeout for the single advice provider call, matching the hosted agent's limit.
const DEFAULT_ADVICE_TIMEOUT_SECS: u64 = 120;

/// Application configuration loaded from environment variables.
/// Fails at startup if no advice backend is configured.
#[derive(Debug, Clone)]
pub struct Config {
    /// Hosted advice agent. When set, advice is fetched over HTTP.
    pub advice_endpoint_url: Option<String>,
    /// Enables the in-process agent and the `/api/v1/agent/advice` endpoint.
    pub anthropic_api_key: Option<String>,
    pub advice_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let config = Config {
            advice_endpoint_url: optional("ADVICE_ENDPOINT_URL"),
            anthropic_api_key: optional("ANTHROPIC_API_KEY"),
            advice_timeout: Duration::from_secs(
                optional("ADVICE_TIMEOUT_SECS")
                    .map(|secs| secs.parse::<u64>())
                    .transpose()
                    .context("ADVICE_TIMEOUT_SECS must be a whole number of seconds")?
                    .unwrap_or(DEFAULT_ADVICE_TIMEOUT_SECS),
            ),
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        };

        if config.advice_endpoint_url.is_none() && config.anthropic_api_key.is_none() {
            bail!("Either ADVICE_ENDPOINT_URL or ANTHROPIC_API_KEY must be set");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_with_endpoint_only() {
        let config = load(&[("ADVICE_ENDPOINT_URL", "https://agent.example/advise")]).unwrap();
        assert_eq!(
            config.advice_endpoint_url.as_deref(),
            Some("https://agent.example/advise")
        );
        assert_eq!(config.anthropic_api_key, None);
        assert_eq!(config.advice_timeout, Duration::from_secs(120));
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_requires_some_advice_backend() {
        assert!(load(&[("PORT", "9000")]).is_err());
        assert!(load(&[("ANTHROPIC_API_KEY", "  ")]).is_err());
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = load(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("ADVICE_TIMEOUT_SECS", "30"),
            ("PORT", "9000"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.advice_timeout, Duration::from_secs(30));
        assert_eq!(config.port, 9000);
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        assert!(load(&[("ANTHROPIC_API_KEY", "k"), ("PORT", "eighty")]).is_err());
        assert!(load(&[("ANTHROPIC_API_KEY", "k"), ("ADVICE_TIMEOUT_SECS", "soon")]).is_err());
    }
}
