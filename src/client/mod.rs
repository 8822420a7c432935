//! HTTP client, request engine and pagination for the ScrapeBadger API.
//!
//! This module provides the main entry point [`ScrapeBadgerClient`]. Every
//! typed method ends up in the same request engine, which retries transient
//! failures and classifies the rest into [`Error`](crate::Error) kinds.
//!
//! # Example
//!
//! ```no_run
//! use scrapebadger::{ClientOptions, ScrapeBadgerClient};
//! use std::time::Duration;
//!
//! # async fn example() -> scrapebadger::Result<()> {
//! let client = ScrapeBadgerClient::with_options(
//!     ClientOptions::new()
//!         .with_timeout(Duration::from_secs(10))
//!         .with_max_retries(5),
//! )?;
//!
//! let tweet = client.tweets().get(&"1585841080431321088".into()).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;
mod request;

pub use config::{
    ClientConfig, ClientOptions, RetryConfig, API_KEY_ENV_VAR, DEFAULT_BASE_URL,
    DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY, DEFAULT_TIMEOUT,
};
pub use http::{ScrapeBadgerClient, API_KEY_HEADER};
pub use paginated::{collect_all, paginate, PaginateOptions, PaginatedResponse, PaginatedStream};
pub use request::{QueryValue, Request};
pub(crate) use http::ClientInner;
