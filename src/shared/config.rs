use std::env;
use std::time::Duration;

pub const DEFAULT_AUTOSAVE_INTERVAL_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Process settings read once at startup. JWT settings live in `JwtConfig`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub autosave_interval: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").ok_or(ConfigError::Missing("HOST"))?;
        let port = parse_or(&lookup, "PORT", None)?;

        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", Some(50))?;
        let db_min_connections = parse_or(&lookup, "DB_MIN_CONNECTIONS", Some(10))?;

        if db_min_connections > db_max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                value: db_min_connections.to_string(),
            });
        }

        let autosave_secs: u64 = parse_or(
            &lookup,
            "AUTOSAVE_INTERVAL_SECS",
            Some(DEFAULT_AUTOSAVE_INTERVAL_SECS),
        )?;

        if autosave_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "AUTOSAVE_INTERVAL_SECS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            database_url,
            host,
            port,
            db_max_connections,
            db_min_connections,
            autosave_interval: Duration::from_secs(autosave_secs),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match (lookup(key), default) {
        (Some(raw), _) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        (None, Some(default)) => Ok(default),
        (None, None) => Err(ConfigError::Missing(key)),
    }
}
