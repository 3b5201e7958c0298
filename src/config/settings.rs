//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_SERVER_HOST, ENV_DATABASE_URL, ENV_HOST, ENV_PORT};
use crate::errors::{AppError, AppResult};

/// Application configuration, built once at startup and passed by reference.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub server_host: String,
    /// Required to serve, absent is allowed for commands that never bind.
    pub server_port: Option<u16>,
    database_url: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("database_url", &self.database_url.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset. A `PORT` that is not a valid port
    /// number is rejected.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let server_port = get(ENV_PORT)
            .map(|raw| {
                raw.trim().parse::<u16>().map_err(|_| {
                    AppError::config(format!("{} must be a valid port number, got {:?}", ENV_PORT, raw))
                })
            })
            .transpose()?;

        Ok(Self {
            server_host: get(ENV_HOST).unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port,
            database_url: get(ENV_DATABASE_URL),
        })
    }

    /// Load from the process environment with CLI flags taking precedence.
    pub fn from_env_with_server(host: Option<String>, port: Option<u16>) -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup_with_server(|key| env::var(key).ok(), host, port)
    }

    /// Like [`Config::from_lookup`], but an explicit `port` replaces `PORT`
    /// before it is validated, so a bad environment value cannot block it.
    pub fn from_lookup_with_server<F>(
        lookup: F,
        host: Option<String>,
        port: Option<u16>,
    ) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::from_lookup(|key| match port {
            Some(_) if key == ENV_PORT => None,
            _ => lookup(key),
        })?;
        Ok(config.with_server(host, port))
    }

    /// Override host and port with explicit values (CLI flags).
    pub fn with_server(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server_host = host;
        }
        if port.is_some() {
            self.server_port = port;
        }
        self
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> AppResult<String> {
        let port = self
            .server_port
            .ok_or_else(|| AppError::config(format!("{} must be set to start the server", ENV_PORT)))?;
        Ok(format!("{}:{}", self.server_host, port))
    }

    /// Get the database connection string.
    pub fn database_url(&self) -> AppResult<&str> {
        self.database_url
            .as_deref()
            .ok_or_else(|| AppError::config(format!("{} must be set", ENV_DATABASE_URL)))
    }
}
