//! Error types for the ScrapeBadger API client.
//!
//! Every failure surfaced by this crate is an [`Error`]. HTTP failures are
//! classified once, by the request engine, into one of the API kinds below;
//! everything above the engine (pagination, resource services) passes them
//! through untouched.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for ScrapeBadger operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Message used when an error body carries neither `detail` nor `message`.
pub(crate) const DEFAULT_ERROR_MESSAGE: &str = "Request failed";

/// The main error type for all ScrapeBadger API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The API key was rejected (401, or a 403 that is not an account restriction).
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Human-readable error message
        message: String,
    },

    /// The account has run out of credits (402).
    #[error("Insufficient credits: {message}")]
    InsufficientCredits {
        /// Human-readable error message
        message: String,
        /// Remaining credit balance, when reported. Balances can be fractional.
        credits_balance: Option<f64>,
    },

    /// The account has been restricted (403 mentioning "restricted").
    #[error("Account restricted: {message}")]
    AccountRestricted {
        /// Human-readable error message
        message: String,
        /// Restriction reason, when reported
        reason: Option<String>,
    },

    /// The requested resource does not exist (404).
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
        /// Kind of resource that was looked up, e.g. `"tweet"`
        resource_type: Option<String>,
        /// Identifier that was looked up
        resource_id: Option<String>,
    },

    /// The request parameters were rejected (422).
    #[error("Validation failed: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
        /// Field name to list of messages
        errors: HashMap<String, Vec<String>>,
    },

    /// Rate limited by the API (429).
    #[error("Rate limited: {message}")]
    RateLimited {
        /// Human-readable error message
        message: String,
        /// When the rate limit window resets
        reset_at: Option<DateTime<Utc>>,
        /// Requests allowed per window
        limit: Option<u64>,
        /// Requests left in the current window
        remaining: Option<u64>,
    },

    /// The API failed with a 5xx status.
    #[error("Server error: status={status}, message={message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
    },

    /// No response arrived within the configured timeout.
    #[error("Request timed out after {timeout:?}")]
    Timeout {
        /// The timeout that elapsed
        timeout: Duration,
    },

    /// Any other API failure.
    #[error("API error: status={status:?}, message={message}")]
    Api {
        /// HTTP status code, absent when no response was classified
        status: Option<u16>,
        /// Human-readable error message
        message: String,
    },

    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Returns `true` if the request engine retries this error.
    ///
    /// Rate limits, server errors, timeouts, transport failures and
    /// unclassified API errors are transient. Everything else is fatal.
    ///
    /// # Example
    ///
    /// ```
    /// use scrapebadger::Error;
    /// use std::time::Duration;
    ///
    /// assert!(Error::Timeout { timeout: Duration::from_secs(30) }.is_retryable());
    /// assert!(!Error::Authentication { message: "bad key".into() }.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::RateLimited { .. }
            | Error::Server { .. }
            | Error::Timeout { .. }
            | Error::Api { .. }
            | Error::Http(_) => true,
            Error::Authentication { .. }
            | Error::InsufficientCredits { .. }
            | Error::AccountRestricted { .. }
            | Error::NotFound { .. }
            | Error::Validation { .. }
            | Error::Json(_)
            | Error::UrlParse(_)
            | Error::Config(_)
            | Error::InvalidInput(_) => false,
        }
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Error::Authentication { .. } | Error::AccountRestricted { .. }
        )
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self.status() {
            Some(status) => (400..500).contains(&status),
            None => matches!(self, Error::InvalidInput(_) | Error::Config(_)),
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }

    /// The HTTP status behind this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Authentication { .. } => Some(401),
            Error::InsufficientCredits { .. } => Some(402),
            Error::AccountRestricted { .. } => Some(403),
            Error::NotFound { .. } => Some(404),
            Error::Validation { .. } => Some(422),
            Error::RateLimited { .. } => Some(429),
            Error::Server { status, .. } => Some(*status),
            Error::Api { status, .. } => *status,
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Time left until the rate limit resets, for [`Error::RateLimited`]
    /// errors whose reset lies in the future.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::RateLimited {
                reset_at: Some(reset_at),
                ..
            } => (*reset_at - Utc::now()).to_std().ok(),
            _ => None,
        }
    }

    /// Classify a non-success API response.
    ///
    /// A 403 counts as an account restriction only when its message contains
    /// "restricted" (any case). This is a text heuristic; the API does not
    /// expose a structured code for it.
    pub(crate) fn from_response(status: u16, body: &Value) -> Self {
        let message = extract_message(body);

        match status {
            401 => Error::Authentication { message },
            402 => Error::InsufficientCredits {
                message,
                credits_balance: body.get("credits_balance").and_then(Value::as_f64),
            },
            403 if message.to_lowercase().contains("restricted") => Error::AccountRestricted {
                reason: string_field(body, "reason"),
                message,
            },
            403 => Error::Authentication { message },
            404 => Error::NotFound {
                resource_type: string_field(body, "resource_type"),
                resource_id: string_field(body, "resource_id"),
                message,
            },
            422 => Error::Validation {
                errors: body.get("errors").map(field_errors).unwrap_or_default(),
                message,
            },
            429 => Error::RateLimited {
                reset_at: body.get("reset_at").and_then(parse_timestamp),
                limit: body.get("limit").and_then(Value::as_u64),
                remaining: body.get("remaining").and_then(Value::as_u64),
                message,
            },
            500..=599 => Error::Server { status, message },
            _ => Error::Api {
                status: Some(status),
                message,
            },
        }
    }
}

fn extract_message(body: &Value) -> String {
    body.get("detail")
        .and_then(Value::as_str)
        .or_else(|| body.get("message").and_then(Value::as_str))
        .unwrap_or(DEFAULT_ERROR_MESSAGE)
        .to_string()
}

fn string_field(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn field_errors(value: &Value) -> HashMap<String, Vec<String>> {
    let Some(map) = value.as_object() else {
        return HashMap::new();
    };

    map.iter()
        .map(|(field, messages)| {
            let messages = match messages {
                Value::Array(items) => items
                    .iter()
                    .filter_map(|m| m.as_str().map(String::from))
                    .collect(),
                Value::String(s) => vec![s.clone()],
                _ => Vec::new(),
            };
            (field.clone(), messages)
        })
        .collect()
}

/// Accepts unix seconds (integer or float) or an RFC 3339 string.
fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => {
            let millis = n
                .as_i64()
                .map(|secs| secs.saturating_mul(1000))
                .or_else(|| n.as_f64().map(|secs| (secs * 1000.0) as i64))?;
            Utc.timestamp_millis_opt(millis).single()
        }
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_retryable() {
        assert!(Error::Timeout {
            timeout: Duration::from_secs(1)
        }
        .is_retryable());
        assert!(Error::Server {
            status: 503,
            message: "down".into()
        }
        .is_retryable());
        assert!(!Error::InvalidInput("bad".into()).is_retryable());
        assert!(!Error::Validation {
            message: "bad".into(),
            errors: HashMap::new()
        }
        .is_retryable());
    }

    #[test]
    fn test_error_auth() {
        assert!(Error::Authentication {
            message: "nope".into()
        }
        .is_auth_error());
        assert!(!Error::Timeout {
            timeout: Duration::from_secs(1)
        }
        .is_auth_error());
    }

    #[test]
    fn test_message_precedence() {
        assert_eq!(
            extract_message(&json!({"detail": "d", "message": "m"})),
            "d"
        );
        assert_eq!(extract_message(&json!({"message": "m"})), "m");
        assert_eq!(extract_message(&json!({})), "Request failed");
        assert_eq!(extract_message(&json!({"detail": [1, 2]})), "Request failed");
    }

    #[test]
    fn test_403_restricted_is_account_restricted() {
        let body = json!({
            "detail": "Account restricted: policy violation",
            "reason": "policy_violation"
        });

        match Error::from_response(403, &body) {
            Error::AccountRestricted { message, reason } => {
                assert_eq!(message, "Account restricted: policy violation");
                assert_eq!(reason.as_deref(), Some("policy_violation"));
            }
            other => panic!("Expected AccountRestricted, got {other:?}"),
        }
    }

    #[test]
    fn test_403_restricted_match_ignores_case() {
        let err = Error::from_response(403, &json!({"message": "Your account is RESTRICTED"}));
        assert!(matches!(err, Error::AccountRestricted { reason: None, .. }));
    }

    #[test]
    fn test_403_forbidden_is_authentication() {
        let err = Error::from_response(403, &json!({"detail": "Forbidden"}));
        assert!(matches!(err, Error::Authentication { ref message } if message == "Forbidden"));
    }

    #[test]
    fn test_402_carries_balance() {
        let balance = |body: Value| match Error::from_response(402, &body) {
            Error::InsufficientCredits { credits_balance, .. } => credits_balance,
            other => panic!("Expected InsufficientCredits, got {other:?}"),
        };

        assert_eq!(balance(json!({"detail": "Out of credits", "credits_balance": 0})), Some(0.0));
        assert_eq!(balance(json!({"credits_balance": 0.5})), Some(0.5));
        assert_eq!(balance(json!({"credits_balance": "lots"})), None);
    }

    #[test]
    fn test_404_resource_fields() {
        let err = Error::from_response(
            404,
            &json!({"detail": "Tweet not found", "resource_type": "tweet", "resource_id": 42}),
        );
        match err {
            Error::NotFound {
                resource_type,
                resource_id,
                ..
            } => {
                assert_eq!(resource_type.as_deref(), Some("tweet"));
                assert_eq!(resource_id.as_deref(), Some("42"));
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_422_field_errors() {
        let body = json!({
            "detail": "Invalid parameters",
            "errors": {
                "query": ["must not be empty", "too short"],
                "count": "must be positive"
            }
        });

        match Error::from_response(422, &body) {
            Error::Validation { errors, .. } => {
                assert_eq!(errors["query"], vec!["must not be empty", "too short"]);
                assert_eq!(errors["count"], vec!["must be positive"]);
            }
            other => panic!("Expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_429_fields() {
        let body = json!({
            "detail": "Slow down",
            "reset_at": 1_700_000_000,
            "limit": 100,
            "remaining": 0
        });

        match Error::from_response(429, &body) {
            Error::RateLimited {
                reset_at,
                limit,
                remaining,
                ..
            } => {
                assert_eq!(reset_at.map(|t| t.timestamp()), Some(1_700_000_000));
                assert_eq!(limit, Some(100));
                assert_eq!(remaining, Some(0));
            }
            other => panic!("Expected RateLimited, got {other:?}"),
        }
    }

    #[test]
    fn test_429_rfc3339_reset() {
        let err = Error::from_response(429, &json!({"reset_at": "2030-01-01T00:00:00Z"}));
        match err {
            Error::RateLimited { reset_at, .. } => {
                assert_eq!(reset_at.map(|t| t.timestamp()), Some(1_893_456_000));
            }
            other => panic!("Expected RateLimited, got {other:?}"),
        }
    }

    #[test]
    fn test_5xx_and_other_statuses() {
        let err = Error::from_response(502, &json!({"message": "bad gateway"}));
        assert!(matches!(err, Error::Server { status: 502, .. }));
        assert!(err.is_server_error());

        let err = Error::from_response(418, &json!({}));
        match err {
            Error::Api { status, message } => {
                assert_eq!(status, Some(418));
                assert_eq!(message, "Request failed");
            }
            other => panic!("Expected Api, got {other:?}"),
        }
    }

    #[test]
    fn test_retry_after() {
        let err = Error::RateLimited {
            message: String::new(),
            reset_at: Some(Utc::now() + chrono::Duration::seconds(30)),
            limit: None,
            remaining: None,
        };
        let wait = err.retry_after().unwrap();
        assert!(wait <= Duration::from_secs(30));
        assert!(wait > Duration::from_secs(25));

        let past = Error::RateLimited {
            message: String::new(),
            reset_at: Some(Utc::now() - chrono::Duration::seconds(5)),
            limit: None,
            remaining: None,
        };
        assert!(past.retry_after().is_none());
    }
}
