//! Server configuration, read from command-line flags or the environment.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Parser)]
#[command(
    name = "consulting-rooms",
    about = "Scheduling backend for consulting room reservations",
    version
)]
pub struct AppConfig {
    /// Address the HTTP server listens on
    #[arg(long, env = "CONSULTING_ROOMS_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Origin allowed to call the API from a browser
    #[arg(long, env = "CONSULTING_ROOMS_CORS_ORIGIN", default_value = DEFAULT_CORS_ORIGIN)]
    pub cors_origin: String,

    /// Directory with a built calendar frontend to serve outside /api
    #[arg(long, env = "CONSULTING_ROOMS_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "CONSULTING_ROOMS_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            static_dir: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() -> Result<(), clap::Error> {
        let config = AppConfig::try_parse_from([
            "consulting-rooms",
            "--bind",
            "0.0.0.0:8000",
            "--cors-origin",
            "http://calendar.local",
            "--static-dir",
            "dist",
            "--log-level",
            "debug",
        ])?;

        assert_eq!(config.bind, SocketAddr::from(([0, 0, 0, 0], 8000)));
        assert_eq!(config.cors_origin, "http://calendar.local");
        assert_eq!(config.static_dir, Some(PathBuf::from("dist")));
        assert_eq!(config.log_level, "debug");
        Ok(())
    }

    #[test]
    fn test_invalid_bind_address_is_rejected() {
        let result = AppConfig::try_parse_from(["consulting-rooms", "--bind", "not-an-address"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_matches_declared_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind.to_string(), DEFAULT_BIND);
        assert_eq!(config.static_dir, None);
    }
}
