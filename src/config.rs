//! Runtime configuration loaded from environment variables.

use std::env;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default HTTP bind address (overridden by `PL_LIVE_BIND_ADDR`).
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, DEFAULT_PORT));

/// Default delay between two full update rounds (overridden by `PL_LIVE_TICK_INTERVAL_MS`).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 2_000;

/// Default log filter when `RUST_LOG` is unset (overridden by `PL_LIVE_LOG`).
pub const DEFAULT_LOG_FILTER: &str = "pl_live=info";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,

    /// Wait between full fixture-update rounds.
    pub tick_interval: Duration,

    /// Base seed for per-connection RNGs. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Fallback tracing filter.
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = parse_var(&lookup, "PL_LIVE_BIND_ADDR")?.unwrap_or(defaults.bind_addr);

        let tick_ms: u64 =
            parse_var(&lookup, "PL_LIVE_TICK_INTERVAL_MS")?.unwrap_or(DEFAULT_TICK_INTERVAL_MS);
        if tick_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "PL_LIVE_TICK_INTERVAL_MS",
                value: tick_ms.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        let seed = parse_var(&lookup, "PL_LIVE_SEED")?;

        let log_filter = lookup("PL_LIVE_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Ok(Self {
            bind_addr,
            tick_interval: Duration::from_millis(tick_ms),
            seed,
            log_filter,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}
