use axum::http::HeaderValue;
use clap::Parser;
use roster_core::{RosterError, RosterResult};

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_LOG_FILTER: &str = "roster_server=debug,tower_http=debug";

#[derive(Parser, Debug, Clone)]
#[command(name = "roster-server")]
#[command(about = "Assigns sequential ids to submitted users", long_about = None)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "ROSTER_BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: String,

    /// Browser origin allowed to call the API
    #[arg(long, env = "ROSTER_ALLOWED_ORIGIN", default_value = DEFAULT_ALLOWED_ORIGIN)]
    pub allowed_origin: String,

    /// tracing-subscriber filter directives
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDRESS.to_string(),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn cors_origin(&self) -> RosterResult<HeaderValue> {
        HeaderValue::from_str(&self.allowed_origin).map_err(|e| {
            RosterError::InvalidConfig(format!("allowed origin {:?}: {}", self.allowed_origin, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let parsed = ServerConfig::try_parse_from(["roster-server"]).unwrap();
        let defaults = ServerConfig::default();

        // Env vars may override the CLI defaults on a developer machine.
        if std::env::var("ROSTER_BIND_ADDRESS").is_err() {
            assert_eq!(parsed.bind, defaults.bind);
        }
        if std::env::var("ROSTER_ALLOWED_ORIGIN").is_err() {
            assert_eq!(parsed.allowed_origin, defaults.allowed_origin);
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let parsed = ServerConfig::try_parse_from([
            "roster-server",
            "--bind",
            "127.0.0.1:9000",
            "--allowed-origin",
            "https://forms.example.com",
        ])
        .unwrap();

        assert_eq!(parsed.bind, "127.0.0.1:9000");
        assert_eq!(parsed.allowed_origin, "https://forms.example.com");
    }

    #[test]
    fn test_cors_origin_rejects_invalid_header() {
        let config = ServerConfig {
            allowed_origin: "http://bad\norigin".to_string(),
            ..ServerConfig::default()
        };

        assert!(matches!(config.cors_origin(), Err(RosterError::InvalidConfig(_))));
        assert_eq!(
            ServerConfig::default().cors_origin().unwrap(),
            "http://localhost:5173"
        );
    }
}
