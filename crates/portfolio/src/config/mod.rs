use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub site: SiteConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = SiteConfig::default();
        let root_id = env::var("SITE_ROOT_ID").unwrap_or(defaults.root_id);
        let title = env::var("SITE_TITLE").unwrap_or(defaults.title);
        let reveal_margin = env::var("SITE_REVEAL_MARGIN").unwrap_or(defaults.reveal_margin);
        let defer_sections = match env::var("SITE_DEFER_SECTIONS") {
            Ok(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag {
                name: "SITE_DEFER_SECTIONS",
                value: raw,
            })?,
            Err(_) => defaults.defer_sections,
        };
        let reveal_stagger_ms = match env::var("SITE_REVEAL_STAGGER_MS") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidNumber {
                    name: "SITE_REVEAL_STAGGER_MS",
                    value: raw,
                })?,
            Err(_) => defaults.reveal_stagger_ms,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            site: SiteConfig {
                title,
                root_id,
                reveal_margin,
                reveal_stagger_ms,
                defer_sections,
            },
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Presentation settings for the rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Document title used for the home page; other pages prefix it.
    pub title: String,
    /// Id of the element every page mounts into.
    pub root_id: String,
    /// Viewport margin handed to the reveal observer, in CSS units.
    pub reveal_margin: String,
    /// Extra reveal delay per section position, so neighbours cascade.
    pub reveal_stagger_ms: u32,
    /// When false every section is rendered inline instead of as a placeholder.
    pub defer_sections: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Lab of Neural Dynamics".to_string(),
            root_id: "root".to_string(),
            reveal_margin: "-10%".to_string(),
            reveal_stagger_ms: 0,
            defer_sections: true,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidFlag { name: &'static str, value: String },
    InvalidNumber { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{name} must be true or false (got '{value}')")
            }
            ConfigError::InvalidNumber { name, value } => {
                write!(f, "{name} must be a non-negative integer (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort
            | ConfigError::InvalidFlag { .. }
            | ConfigError::InvalidNumber { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "SITE_ROOT_ID",
            "SITE_TITLE",
            "SITE_REVEAL_MARGIN",
            "SITE_DEFER_SECTIONS",
            "SITE_REVEAL_STAGGER_MS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.site, SiteConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn site_overrides_are_read_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SITE_ROOT_ID", "app");
        env::set_var("SITE_DEFER_SECTIONS", "off");
        env::set_var("SITE_REVEAL_STAGGER_MS", " 120 ");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.site.root_id, "app");
        assert!(!config.site.defer_sections);
        assert_eq!(config.site.reveal_stagger_ms, 120);
        reset_env();
    }

    #[test]
    fn rejects_negative_stagger() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SITE_REVEAL_STAGGER_MS", "-5");
        let err = AppConfig::load().expect_err("stagger is rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                name: "SITE_REVEAL_STAGGER_MS",
                ..
            }
        ));
        reset_env();
    }

    #[test]
    fn rejects_unparseable_defer_flag() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SITE_DEFER_SECTIONS", "sometimes");
        let err = AppConfig::load().expect_err("flag is rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidFlag {
                name: "SITE_DEFER_SECTIONS",
                ..
            }
        ));
        reset_env();
    }
}
