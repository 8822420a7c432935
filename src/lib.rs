//! # scrapebadger
//!
//! An async Rust client for the ScrapeBadger Twitter scraping API.
//!
//! Tweets, users, lists, communities, trends and places are exposed as typed
//! methods. Every call goes through one request engine that enforces a
//! per-attempt timeout, retries transient failures with exponential backoff
//! (honouring rate limit resets), and classifies everything else into a
//! closed [`Error`] enum.
//!
//! ## Features
//!
//! - **Typed resources**: `tweets()`, `users()`, `lists()`, `communities()`,
//!   `trends()`, `geo()`
//! - **Cursor pagination**: single pages as [`PaginatedResponse`], or lazy
//!   [`PaginatedStream`]s via the `*_all` methods
//! - **Retries**: rate limits, 5xx and timeouts are retried; auth, credit,
//!   not-found and validation failures are not
//! - **Async-first**: built on Tokio and `reqwest`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scrapebadger::ScrapeBadgerClient;
//! use scrapebadger::api::SearchOptions;
//!
//! #[tokio::main]
//! async fn main() -> scrapebadger::Result<()> {
//!     // Reads SCRAPEBADGER_API_KEY
//!     let client = ScrapeBadgerClient::from_env()?;
//!
//!     let user = client.users().get_by_username("rustlang").await?;
//!     println!("{} followers", user.followers_count.unwrap_or_default());
//!
//!     let page = client.tweets().search("#rustlang", SearchOptions::new()).await?;
//!     for tweet in &page.data {
//!         println!("{}", tweet.text);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pagination
//!
//! ```rust,no_run
//! use futures_util::StreamExt;
//! use scrapebadger::ScrapeBadgerClient;
//!
//! #[tokio::main]
//! async fn main() -> scrapebadger::Result<()> {
//!     let client = ScrapeBadgerClient::from_env()?;
//!
//!     let mut stream = client.users().followers_all("rustlang", Some(250));
//!     while let Some(user) = stream.next().await {
//!         println!("@{}", user?.username);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use scrapebadger::{Error, ScrapeBadgerClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ScrapeBadgerClient::new("sb_live_123").unwrap();
//!
//!     match client.users().get_by_username("nobody_here").await {
//!         Ok(user) => println!("found {}", user.id),
//!         Err(Error::NotFound { .. }) => println!("no such user"),
//!         Err(Error::RateLimited { reset_at, .. }) => println!("rate limited until {reset_at:?}"),
//!         Err(e) => eprintln!("failed: {e}"),
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use client::{
    collect_all, paginate, ClientConfig, ClientOptions, PaginateOptions, PaginatedResponse,
    PaginatedStream, QueryValue, Request, RetryConfig, ScrapeBadgerClient,
};
pub use error::{Error, Result};
pub use models::{CommunityId, ListId, PlaceId, TweetId, UserId};

/// Prelude module for convenient imports.
///
/// ```rust
/// use scrapebadger::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CommunitiesService, CommunityTweetsOptions, GeoSearchOptions, GeoService, ListsService,
        SearchOptions, TrendsOptions, TrendsService, TweetsService, UsersService,
    };
    pub use crate::client::{
        collect_all, paginate, ClientOptions, PaginateOptions, PaginatedResponse,
        PaginatedStream, ScrapeBadgerClient,
    };
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Identifiers
        CommunityId, ListId, PlaceId, TweetId, UserId,
        // Enums
        CommunityTweetType, PlaceGranularity, QueryType, TrendCategory,
        // Entities
        Community, Location, Media, Place, PlaceTrends, Trend, Tweet, TwitterList, User,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tweet_id_creation() {
        let id = TweetId::new("1585841080431321088");
        assert_eq!(id.as_str(), "1585841080431321088");
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(client::DEFAULT_BASE_URL, "https://scrapebadger.com");
    }

    #[test]
    fn test_client_requires_api_key() {
        let err = ClientOptions::new()
            .resolve_with(|_| None)
            .and_then(ScrapeBadgerClient::with_config)
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScrapeBadgerClient>();
        assert_send_sync::<Error>();
    }

    #[test]
    fn test_stream_is_send() {
        fn assert_send<T: Send>(_: &T) {}
        let client = ScrapeBadgerClient::new("key").unwrap();
        assert_send(&client.tweets().search_all("rust", Default::default(), Some(1)));
    }
}
