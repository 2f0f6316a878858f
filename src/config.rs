//! Runtime configuration loaded from the process environment.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

/// Minimum key length accepted by the signed session cookie.
pub const MIN_SESSION_SECRET_LEN: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

#[derive(Clone)]
pub struct SessionConfig {
    pub secret: Vec<u8>,
    pub secure_cookie: bool,
    /// Sessions untouched for this long stop authenticating.
    pub idle_timeout: Duration,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"***")
            .field("secure_cookie", &self.secure_cookie)
            .field("idle_timeout", &self.idle_timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = required(&lookup, "DATABASE_URL")?;
        let secret = required(&lookup, "SESSION_SECRET")?;
        if secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(ConfigError::Invalid {
                name: "SESSION_SECRET",
                reason: format!("must be at least {MIN_SESSION_SECRET_LEN} bytes"),
            });
        }

        let host = parsed(&lookup, "HOST")?.unwrap_or(IpAddr::from([127, 0, 0, 1]));
        let port = parsed(&lookup, "PORT")?.unwrap_or(5000);
        let max_connections = parsed(&lookup, "DB_MAX_CONNECTIONS")?.unwrap_or(10);
        let acquire_timeout_secs: u64 = parsed(&lookup, "DB_ACQUIRE_TIMEOUT_SECS")?.unwrap_or(5);
        let secure_cookie = parsed(&lookup, "SESSION_SECURE_COOKIE")?.unwrap_or(true);
        let idle_timeout_secs: u64 = parsed(&lookup, "SESSION_IDLE_TIMEOUT_SECS")?.unwrap_or(3600);
        if idle_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "SESSION_IDLE_TIMEOUT_SECS",
                reason: "must be greater than zero".to_string(),
            });
        }

        let bcrypt_cost = parsed(&lookup, "BCRYPT_COST")?.unwrap_or(bcrypt::DEFAULT_COST);
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                name: "BCRYPT_COST",
                reason: "must be between 4 and 31".to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            database: DatabaseConfig {
                url: database_url,
                max_connections,
                acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            },
            session: SessionConfig {
                secret: secret.into_bytes(),
                secure_cookie,
                idle_timeout: Duration::from_secs(idle_timeout_secs),
            },
            bcrypt_cost,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn parsed<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid { name, reason: e.to_string() }),
        _ => Ok(None),
    }
}
