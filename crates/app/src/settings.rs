//! Handles settings for the application. Configuration is read from
//! `settings.toml` (optional) and from `FREEDOM__<SECTION>__<KEY>`
//! environment variables, the latter taking precedence.
//!
//! See `settings.example.toml` for the configuration.

use chrono::Duration;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
}

impl Server {
    pub fn address(&self) -> String {
        let bind = self.bind.as_deref().unwrap_or("127.0.0.1");
        format!("{bind}:{}", self.port)
    }
}

#[derive(Debug, Deserialize)]
pub struct Database {
    /// A sea-orm connection url, or `memory` for a throwaway SQLite database.
    pub url: String,
}

impl Database {
    pub fn connection_url(&self) -> &str {
        match self.url.as_str() {
            "memory" => "sqlite::memory:",
            url => url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Jwt {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    #[serde(default = "default_expiry_minutes")]
    pub expiry_minutes: i64,
}

fn default_expiry_minutes() -> i64 {
    60
}

impl Jwt {
    pub fn expiry(&self) -> Result<Duration, ConfigError> {
        Duration::try_minutes(self.expiry_minutes).ok_or_else(|| {
            ConfigError::Message(format!(
                "jwt.expiry_minutes out of range: {}",
                self.expiry_minutes
            ))
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub database: Database,
    pub jwt: Jwt,
}

impl Settings {
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("FREEDOM").separator("__"))
            .build()?
            .try_deserialize()
    }
}
