use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::assessment::RecommendationConfig;

/// Distinguishes runtime behavior for different stages of the service.
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

    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub mail: MailConfig,
    pub storage: StorageConfig,
    pub recommendations: RecommendationConfig,
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
        let log_format = LogFormat::parse(
            &env::var("APP_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string()),
        )?;

        let mail = MailConfig {
            api_key: non_empty_var("RESEND_API_KEY"),
            api_url: env::var("RESEND_API_URL")
                .unwrap_or_else(|_| "https://api.resend.com".to_string()),
            sender: env::var("APP_MAIL_FROM")
                .unwrap_or_else(|_| "Longevity Assessment <onboarding@resend.dev>".to_string()),
        };
        if environment.is_production() && mail.api_key.is_none() {
            return Err(ConfigError::MissingMailCredentials);
        }

        let storage = match non_empty_var("SUPABASE_URL") {
            Some(url) => {
                let service_key = non_empty_var("SUPABASE_SERVICE_ROLE_KEY")
                    .ok_or(ConfigError::MissingStorageKey)?;
                StorageConfig::Supabase {
                    url,
                    service_key,
                    table: env::var("APP_SUBMISSIONS_TABLE")
                        .unwrap_or_else(|_| "quiz_submissions".to_string()),
                }
            }
            None if environment.is_production() => return Err(ConfigError::MissingStorage),
            None => StorageConfig::InMemory,
        };

        let recommendations = match env::var("APP_DIET_GUIDES")
            .unwrap_or_else(|_| "full".to_string())
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "full" => RecommendationConfig::default(),
            "mediterranean" => RecommendationConfig {
                alternative_diet_guides: false,
            },
            other => return Err(ConfigError::InvalidDietGuides(other.to_string())),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                format: log_format,
            },
            mail,
            storage,
            recommendations,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
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
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidLogFormat(other.to_string())),
        }
    }
}

/// Outbound mail provider settings. Without an API key the service keeps
/// reports in a local outbox.
#[derive(Clone)]
pub struct MailConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub sender: String,
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("sender", &self.sender)
            .finish()
    }
}

/// Where submission rows are persisted. Production refuses the in-memory
/// store.
#[derive(Clone, PartialEq, Eq)]
pub enum StorageConfig {
    InMemory,
    Supabase {
        url: String,
        service_key: String,
        table: String,
    },
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageConfig::InMemory => f.write_str("InMemory"),
            StorageConfig::Supabase { url, table, .. } => f
                .debug_struct("Supabase")
                .field("url", url)
                .field("service_key", &"<redacted>")
                .field("table", table)
                .finish(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidLogFormat(String),
    InvalidDietGuides(String),
    MissingMailCredentials,
    MissingStorage,
    MissingStorageKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidLogFormat(value) => {
                write!(f, "APP_LOG_FORMAT must be 'compact' or 'json' (got '{value}')")
            }
            ConfigError::InvalidDietGuides(value) => write!(
                f,
                "APP_DIET_GUIDES must be 'full' or 'mediterranean' (got '{value}')"
            ),
            ConfigError::MissingMailCredentials => {
                write!(f, "RESEND_API_KEY is required in production")
            }
            ConfigError::MissingStorage => {
                write!(f, "SUPABASE_URL is required in production")
            }
            ConfigError::MissingStorageKey => {
                write!(f, "SUPABASE_SERVICE_ROLE_KEY is required when SUPABASE_URL is set")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
