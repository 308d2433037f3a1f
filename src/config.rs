//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SHORT_DOMAIN` - Host shown in short URLs (default: `short.url`)
//! - `LINK_BACKEND` - `demo` or `memory` (default: `demo`)
//! - `TOKEN_LENGTH` - Generated token length, 4-16 (default: 6)
//! - `SHORTEN_DELAY_MS` - Demo latency for shortening (default: 1000)
//! - `RESOLVE_DELAY_MS` - Demo latency for resolution (default: 500)
//! - `OPERATION_TIMEOUT_MS` - Timeout for a single backend call (default: 5000)
//! - `CLICK_QUEUE_CAPACITY` - Click event buffer size (default: 1000, min: 10)
//! - `LINK_TTL_DAYS` - Lifetime of links in the memory backend (default: 365, max: 36500)
//! - `EXPIRY_SWEEP_SECS` - Interval between expired-link sweeps (default: 3600)
//! - `BEHIND_PROXY` - Trust `X-Forwarded-For`/`X-Real-IP` and `CF-IPCountry` (default: false)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::TimeDelta;

use crate::application::services::LinkSettings;
use crate::infrastructure::backends::DemoLatency;
use crate::utils::token_generator::{DEFAULT_TOKEN_LENGTH, MAX_TOKEN_LENGTH, MIN_TOKEN_LENGTH};

/// Upper bound for `LINK_TTL_DAYS`, roughly a century.
pub const MAX_LINK_TTL_DAYS: i64 = 36_500;

/// Which [`crate::domain::repositories::LinkRepository`] serves requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkBackend {
    /// Fabricated data for any token; nothing is stored.
    Demo,
    /// Token-keyed map living for the process lifetime.
    Memory,
}

impl FromStr for LinkBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(Self::Demo),
            "memory" => Ok(Self::Memory),
            other => anyhow::bail!("LINK_BACKEND must be 'demo' or 'memory', got '{}'", other),
        }
    }
}

impl fmt::Display for LinkBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Demo => write!(f, "demo"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub short_domain: String,
    pub link_backend: LinkBackend,
    pub token_length: usize,
    pub shorten_delay_ms: u64,
    pub resolve_delay_ms: u64,
    pub operation_timeout_ms: u64,
    pub click_queue_capacity: usize,
    pub link_ttl_days: i64,
    pub expiry_sweep_secs: u64,
    /// When true, client IP and country are read from proxy headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            short_domain: "short.url".to_string(),
            link_backend: LinkBackend::Demo,
            token_length: DEFAULT_TOKEN_LENGTH,
            shorten_delay_ms: 1000,
            resolve_delay_ms: 500,
            operation_timeout_ms: 5000,
            click_queue_capacity: 1000,
            link_ttl_days: 365,
            expiry_sweep_secs: 3600,
            behind_proxy: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `LINK_BACKEND` names an unknown backend.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let link_backend = match env::var("LINK_BACKEND") {
            Ok(value) => value
                .parse::<LinkBackend>()
                .context("Failed to load backend configuration")?,
            Err(_) => defaults.link_backend,
        };

        Ok(Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            short_domain: env::var("SHORT_DOMAIN").unwrap_or(defaults.short_domain),
            link_backend,
            token_length: parse_var("TOKEN_LENGTH").unwrap_or(defaults.token_length),
            shorten_delay_ms: parse_var("SHORTEN_DELAY_MS").unwrap_or(defaults.shorten_delay_ms),
            resolve_delay_ms: parse_var("RESOLVE_DELAY_MS").unwrap_or(defaults.resolve_delay_ms),
            operation_timeout_ms: parse_var("OPERATION_TIMEOUT_MS")
                .unwrap_or(defaults.operation_timeout_ms),
            click_queue_capacity: parse_var("CLICK_QUEUE_CAPACITY")
                .unwrap_or(defaults.click_queue_capacity),
            link_ttl_days: parse_var("LINK_TTL_DAYS").unwrap_or(defaults.link_ttl_days),
            expiry_sweep_secs: parse_var("EXPIRY_SWEEP_SECS").unwrap_or(defaults.expiry_sweep_secs),
            behind_proxy: env::var("BEHIND_PROXY")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(defaults.behind_proxy),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `short_domain` is empty, carries a scheme or a path
    /// - `token_length` is outside 4-16
    /// - `operation_timeout_ms` or `expiry_sweep_secs` is zero
    /// - `link_ttl_days` is outside 1-36500
    /// - `click_queue_capacity` is outside 10-1000000
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        // Short domain is shown without a scheme and must parse as a host
        if self.short_domain.is_empty()
            || self.short_domain.contains("://")
            || self.short_domain.contains('/')
        {
            anyhow::bail!(
                "SHORT_DOMAIN must be a bare host such as 'short.url', got '{}'",
                self.short_domain
            );
        }
        url::Url::parse(&format!("https://{}", self.short_domain)).with_context(|| {
            format!("SHORT_DOMAIN is not a valid host: '{}'", self.short_domain)
        })?;

        if !(MIN_TOKEN_LENGTH..=MAX_TOKEN_LENGTH).contains(&self.token_length) {
            anyhow::bail!(
                "TOKEN_LENGTH must be between {} and {}, got {}",
                MIN_TOKEN_LENGTH,
                MAX_TOKEN_LENGTH,
                self.token_length
            );
        }

        if self.operation_timeout_ms == 0 {
            anyhow::bail!("OPERATION_TIMEOUT_MS must be greater than 0");
        }

        if self.click_queue_capacity < 10 || self.click_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "CLICK_QUEUE_CAPACITY must be between 10 and 1000000, got {}",
                self.click_queue_capacity
            );
        }

        if !(1..=MAX_LINK_TTL_DAYS).contains(&self.link_ttl_days) {
            anyhow::bail!(
                "LINK_TTL_DAYS must be between 1 and {}, got {}",
                MAX_LINK_TTL_DAYS,
                self.link_ttl_days
            );
        }

        if self.expiry_sweep_secs == 0 {
            anyhow::bail!("EXPIRY_SWEEP_SECS must be greater than 0");
        }

        Ok(())
    }

    /// Service settings derived from this configuration.
    pub fn link_settings(&self) -> LinkSettings {
        LinkSettings {
            short_domain: self.short_domain.clone(),
            token_length: self.token_length,
            link_ttl: TimeDelta::try_days(self.link_ttl_days).unwrap_or(TimeDelta::MAX),
            operation_timeout: Duration::from_millis(self.operation_timeout_ms),
        }
    }

    /// Period of the expired-link sweep.
    pub fn expiry_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.expiry_sweep_secs)
    }

    /// Artificial latency for the demo backend.
    pub fn demo_latency(&self) -> DemoLatency {
        DemoLatency {
            shorten: Duration::from_millis(self.shorten_delay_ms),
            resolve: Duration::from_millis(self.resolve_delay_ms),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Link backend: {}", self.link_backend);
        tracing::info!("  Short domain: {}", self.short_domain);
        tracing::info!("  Token length: {}", self.token_length);

        if self.link_backend == LinkBackend::Demo {
            tracing::info!(
                "  Demo latency: shorten {}ms, resolve {}ms",
                self.shorten_delay_ms,
                self.resolve_delay_ms
            );
        } else {
            tracing::info!("  Link TTL: {} days", self.link_ttl_days);
            tracing::info!("  Expiry sweep: every {}s", self.expiry_sweep_secs);
        }

        tracing::info!("  Behind proxy: {}", self.behind_proxy);

        tracing::info!("  Operation timeout: {}ms", self.operation_timeout_ms);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Click queue capacity: {}", self.click_queue_capacity);
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
