// [library] Secrecy crate - keeps the database password out of Debug output and logs
use secrecy::{ExposeSecret, Secret};

// [rust] Standard library networking types for the bind address
use std::net::{IpAddr, Ipv4Addr};

// [business] Origins allowed to call the API when ALLOWED_ORIGINS is not set
// The published frontend plus the local Vite dev server
pub const DEFAULT_ALLOWED_ORIGINS: &str =
    "https://simpleyespiritual.netlify.app,http://localhost:5173";

// [rust] Derive macro attributes provide automatic trait implementations
// Debug: enables {:?} formatting (Secret<T> prints as [REDACTED])
// Clone: handlers receive their own copy through router state
#[derive(Debug, Clone)]
pub struct Config {
    // [business] Network binding configuration - where the server listens for connections
    pub app_host: IpAddr,
    pub app_port: u16,

    // [business] MySQL connection parameters, each read from its own variable
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: Secret<String>, // [security] Never logged
    pub db_name: String,

    // [business] Pool sizing - bounded concurrent sessions
    pub db_max_connections: u32,
    // [business] How long a request may wait for a pooled connection before failing
    pub db_acquire_timeout_secs: u64,

    // [security] CORS allow-list - exact origins permitted to call the API from a browser
    pub allowed_origins: Vec<String>,
}

impl Config {
    // [business] Factory method - creates Config from environment variables
    // Every setting has a fallback, so only malformed startup state is an error
    pub fn from_env() -> Result<Self, anyhow::Error> {
        // [library] Load .env file if present - missing file is not an error
        dotenvy::dotenv().ok();

        let config = Config {
            app_host: std::env::var("APP_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string())
                .parse()
                .unwrap_or_else(|_| IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0))),

            app_port: env_or("PORT", 5000),

            // [business] Empty host would never connect, so it resolves to localhost
            db_host: std::env::var("DB_HOST")
                .ok()
                .filter(|host| !host.trim().is_empty())
                .unwrap_or_else(|| "localhost".to_string()),

            db_port: env_or("DB_PORT", 3306),
            db_user: std::env::var("DB_USER").unwrap_or_default(),
            db_password: Secret::new(std::env::var("DB_PASS").unwrap_or_default()),
            db_name: std::env::var("DB_NAME").unwrap_or_default(),

            db_max_connections: env_or("DB_MAX_CONNECTIONS", 10),
            db_acquire_timeout_secs: env_or("DB_ACQUIRE_TIMEOUT_SECS", 30),

            allowed_origins: parse_origins(
                &std::env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
        };

        // [library] Structured logging of configuration (without secrets)
        tracing::info!(
            host = %config.app_host,
            port = config.app_port,
            db_host = %config.db_host,
            db_port = config.db_port,
            db_name = %config.db_name,
            pool_size = config.db_max_connections,
            origins = ?config.allowed_origins,
            "Config loaded"
        );

        Ok(config)
    }

    // [business] Network bind address string for the TCP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }

    // [security] Controlled access to the database password
    pub fn db_password(&self) -> &str {
        self.db_password.expose_secret()
    }
}

// [rust] Generic env lookup with parse fallback - unset or malformed values both yield the default
fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

// [security] Parse comma-separated list of allowed origins for CORS
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
