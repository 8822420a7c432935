//! Client configuration options.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Environment variable consulted when no API key is passed explicitly.
pub const API_KEY_ENV_VAR: &str = "SCRAPEBADGER_API_KEY";

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://scrapebadger.com";

/// Default per-attempt request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Default number of retries after the first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default base delay for exponential backoff.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1_000);

/// Server-provided rate limit waits at or above this are ignored.
const MAX_RATE_LIMIT_WAIT: Duration = Duration::from_secs(60);

/// User-supplied client options.
///
/// Every field is optional; [`resolve`](Self::resolve) fills the gaps with
/// defaults and the `SCRAPEBADGER_API_KEY` environment variable.
///
/// # Example
///
/// ```
/// use scrapebadger::ClientOptions;
/// use std::time::Duration;
///
/// let config = ClientOptions::new()
///     .with_api_key("sb_live_123")
///     .with_timeout(Duration::from_secs(60))
///     .with_max_retries(5)
///     .resolve()
///     .unwrap();
///
/// assert_eq!(config.retry().max_retries, 5);
/// ```
#[derive(Default, Clone)]
pub struct ClientOptions {
    /// API key; falls back to the environment when absent
    pub api_key: Option<String>,
    /// Base URL of the API
    pub base_url: Option<String>,
    /// Per-attempt request timeout
    pub timeout: Option<Duration>,
    /// Retries after the first attempt
    pub max_retries: Option<u32>,
    /// Base delay for exponential backoff
    pub retry_delay: Option<Duration>,
    /// User-Agent header value
    pub user_agent: Option<String>,
}

impl ClientOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the per-attempt request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Set the base retry delay.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = Some(retry_delay);
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Resolve against the process environment.
    pub fn resolve(self) -> Result<ClientConfig> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve using `env` to look up environment variables.
    ///
    /// The explicit API key wins over the environment. Keys are trimmed and
    /// blank keys count as missing. Fails with [`Error::Config`] when no key
    /// is found or the key cannot be sent as a header value.
    pub fn resolve_with<F>(self, env: F) -> Result<ClientConfig>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let api_key = non_blank(self.api_key)
            .or_else(|| non_blank(env(API_KEY_ENV_VAR)))
            .ok_or_else(|| {
                Error::Config(format!(
                    "missing API key: pass one explicitly or set {API_KEY_ENV_VAR}"
                ))
            })?;
        if HeaderValue::from_str(&api_key).is_err() {
            return Err(Error::Config(
                "API key contains characters not allowed in an HTTP header".to_string(),
            ));
        }

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        url::Url::parse(&base_url)?;

        Ok(ClientConfig {
            api_key: SecretString::from(api_key),
            base_url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            retry: RetryConfig {
                max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
                retry_delay: self.retry_delay.unwrap_or(DEFAULT_RETRY_DELAY),
            },
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
        })
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("retry_delay", &self.retry_delay)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn default_user_agent() -> String {
    format!("scrapebadger-rust/{}", env!("CARGO_PKG_VERSION"))
}

/// Fully resolved, immutable client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: SecretString,
    base_url: String,
    timeout: Duration,
    retry: RetryConfig,
    user_agent: String,
}

impl ClientConfig {
    /// The API key sent with every request.
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-attempt request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Retry settings.
    pub fn retry(&self) -> &RetryConfig {
        &self.retry
    }

    /// User-Agent header value.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Configuration for automatic retries.
///
/// Transient failures are retried up to `max_retries` times, waiting
/// `retry_delay * 2^attempt` between attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Base backoff delay
    pub retry_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl RetryConfig {
    /// Calculate the exponential backoff for a zero-indexed attempt.
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        self.retry_delay
            .saturating_mul(2u32.saturating_pow(attempt))
    }

    /// Delay before retrying after `error` failed the given attempt.
    ///
    /// A rate limit reset less than a minute past `now` replaces the
    /// exponential backoff.
    pub fn delay_for(&self, error: &Error, attempt: u32, now: DateTime<Utc>) -> Duration {
        if let Error::RateLimited {
            reset_at: Some(reset_at),
            ..
        } = error
        {
            if let Ok(wait) = (*reset_at - now).to_std() {
                if !wait.is_zero() && wait < MAX_RATE_LIMIT_WAIT {
                    return wait;
                }
            }
        }

        self.backoff_for_attempt(attempt)
    }
}
