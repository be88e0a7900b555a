//! Application settings loaded from environment variables.

use std::env;
use std::time::Duration;

use super::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_MIN_CONNECTIONS, DEFAULT_DATABASE_URL,
    DEFAULT_DISPOSABLE_EMAIL_DOMAINS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_SHUTDOWN_GRACE_SECONDS,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_min_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    /// Allowed CORS origins; `/pattern/` entries are regular expressions
    pub cors_whitelist: Vec<String>,
    pub disposable_email_domains: Vec<String>,
    pub shutdown_grace_seconds: u64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("database_min_connections", &self.database_min_connections)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("cors_whitelist", &self.cors_whitelist)
            .field("disposable_email_domains", &self.disposable_email_domains)
            .field("shutdown_grace_seconds", &self.shutdown_grace_seconds)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            database_min_connections: DEFAULT_DATABASE_MIN_CONNECTIONS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            cors_whitelist: Vec::new(),
            disposable_email_domains: DEFAULT_DISPOSABLE_EMAIL_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            shutdown_grace_seconds: DEFAULT_SHUTDOWN_GRACE_SECONDS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to the defaults in
    /// [`crate::config::constants`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or(defaults.database_max_connections),
            database_min_connections: parse_var("DATABASE_MIN_CONNECTIONS")
                .unwrap_or(defaults.database_min_connections),
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cors_whitelist: env::var("CORS_WHITELIST")
                .map(|v| split_list(&v))
                .unwrap_or(defaults.cors_whitelist),
            disposable_email_domains: env::var("DISPOSABLE_EMAIL_DOMAINS")
                .map(|v| split_list(&v))
                .unwrap_or(defaults.disposable_email_domains),
            shutdown_grace_seconds: parse_var("SHUTDOWN_GRACE_SECONDS")
                .unwrap_or(defaults.shutdown_grace_seconds),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Grace period granted to the shutdown sequence.
    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_seconds)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Split a comma-separated list, dropping blank entries.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
