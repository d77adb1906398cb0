// config.rs
use crate::auth::SessionConfig;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

/// Listings API base URL baked in at build time, `PROPERTY_API_URL` at runtime wins.
pub const BUILD_API_URL: &str = match option_env!("PROPERTY_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub api_base_url: Url,
    pub api_timeout: Duration,
    pub sessions: SessionConfig,
}

#[derive(Debug)]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}={:?}: {}", self.var, self.value, self.reason)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Reads the process environment (after `.env`, if the caller loaded one).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = parse_var(&lookup, "PORTAL_ADDR", "127.0.0.1:3000", |v| {
            v.parse::<SocketAddr>().map_err(|e| e.to_string())
        })?;

        let max_workers = parse_var(&lookup, "PORTAL_WORKERS", "8", |v| {
            match v.parse::<usize>() {
                Ok(0) => Err("must be at least 1".to_string()),
                Ok(n) => Ok(n),
                Err(e) => Err(e.to_string()),
            }
        })?;

        let api_base_url = parse_var(&lookup, "PROPERTY_API_URL", BUILD_API_URL, |v| {
            let url = Url::parse(v).map_err(|e| e.to_string())?;
            if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
                return Err("expected an http(s) base URL".to_string());
            }
            Ok(url)
        })?;

        let api_timeout = parse_var(&lookup, "API_TIMEOUT_SECS", "30", |v| {
            v.parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| e.to_string())
        })?;

        let defaults = SessionConfig::default();
        let credential_ttl_secs = parse_var(&lookup, "CREDENTIAL_TTL_SECS", "3600", |v| {
            match v.parse::<i64>() {
                Ok(n) if n > 0 => Ok(n),
                Ok(_) => Err("must be positive".to_string()),
                Err(e) => Err(e.to_string()),
            }
        })?;

        Ok(Self {
            addr,
            max_workers,
            api_base_url,
            api_timeout,
            sessions: SessionConfig {
                credential_ttl_secs,
                ..defaults
            },
        })
    }
}

fn parse_var<T, L, P>(
    lookup: &L,
    var: &'static str,
    default: &str,
    parse: P,
) -> Result<T, ConfigError>
where
    L: Fn(&str) -> Option<String>,
    P: FnOnce(&str) -> Result<T, String>,
{
    let value = lookup(var)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string());

    parse(value.trim()).map_err(|reason| ConfigError {
        var,
        value,
        reason,
    })
}
