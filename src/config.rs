use std::env;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    // Connection pool settings
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub run_migrations: bool,
    // Server URL advertised in the API documentation
    pub public_base_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

/// Reads an optional variable and parses it, reporting the variable name on failure.
fn parse_var<T>(var: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env::var(var)
        .ok()
        .map(|v| {
            v.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
                var: var.to_string(),
                message: e.to_string(),
            })
        })
        .transpose()
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Skip loading .env in test mode to allow tests to control env vars
        if env::var("CLIENTES_TEST_MODE").is_err() {
            dotenvy::dotenv().ok();
        }

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingVar("DATABASE_URL".to_string()))?;

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = parse_var::<u16>("PORT")?.unwrap_or(3009);

        let db_max_connections = parse_var::<u32>("DB_MAX_CONNECTIONS")?.unwrap_or(20);
        if db_max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                var: "DB_MAX_CONNECTIONS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        let db_acquire_timeout_secs = parse_var::<u64>("DB_ACQUIRE_TIMEOUT_SECS")?.unwrap_or(30);

        let run_migrations = parse_var::<bool>("RUN_MIGRATIONS")?.unwrap_or(false);

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", port));

        Ok(Config {
            database_url,
            host,
            port,
            db_max_connections,
            db_acquire_timeout_secs,
            run_migrations,
            public_base_url,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
