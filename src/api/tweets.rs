//! Tweets service.

use std::sync::Arc;

use crate::api::{fetch_page, stream_pages, DataEnvelope, TWITTER_PREFIX};
use crate::client::{ClientInner, PaginatedResponse, PaginatedStream, Request};
use crate::models::{QueryType, Tweet, TweetId, User};
use crate::{Error, Result};

/// Maximum number of tweet IDs per batch lookup.
pub const MAX_TWEETS_PER_REQUEST: usize = 100;

/// Service for tweet lookups and search.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use scrapebadger::api::SearchOptions;
/// use scrapebadger::models::QueryType;
///
/// # async fn example(client: scrapebadger::ScrapeBadgerClient) -> scrapebadger::Result<()> {
/// // One page of the latest results
/// let page = client
///     .tweets()
///     .search("from:rustlang", SearchOptions::new().query_type(QueryType::Latest))
///     .await?;
/// println!("{} tweets, more: {}", page.len(), page.has_more());
///
/// // Up to 200 results across pages
/// let mut stream = client.tweets().search_all("#rustlang", SearchOptions::new(), Some(200));
/// while let Some(tweet) = stream.next().await {
///     println!("{}", tweet?.text);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TweetsService {
    inner: Arc<ClientInner>,
}

/// Options for [`TweetsService::search`].
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Result ranking
    pub query_type: QueryType,
    /// Cursor from a previous page
    pub cursor: Option<String>,
}

impl SearchOptions {
    /// Default options: top results, first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ranking.
    pub fn query_type(mut self, query_type: QueryType) -> Self {
        self.query_type = query_type;
        self
    }

    /// Continue from a cursor.
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl TweetsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a tweet by ID.
    pub async fn get(&self, id: &TweetId) -> Result<Tweet> {
        let request = Request::get(format!("{TWITTER_PREFIX}/tweets/tweet")).segment(id.as_str());
        self.inner.execute(request).await
    }

    /// Get several tweets in one request.
    ///
    /// At most 100 IDs per call. Tweets that no longer exist are left out
    /// of the result.
    pub async fn get_many(&self, ids: &[TweetId]) -> Result<Vec<Tweet>> {
        if ids.is_empty() {
            return Err(Error::InvalidInput("At least one tweet ID is required".to_string()));
        }
        if ids.len() > MAX_TWEETS_PER_REQUEST {
            return Err(Error::InvalidInput(format!(
                "Too many tweet IDs. Maximum is {}, got {}",
                MAX_TWEETS_PER_REQUEST,
                ids.len()
            )));
        }

        let joined = ids.iter().map(TweetId::as_str).collect::<Vec<_>>().join(",");
        let request = Request::get(format!("{TWITTER_PREFIX}/tweets")).query("tweets", joined);

        let response: DataEnvelope<Tweet> = self.inner.execute(request).await?;
        Ok(response.data)
    }

    /// Search tweets. Supports the advanced search syntax
    /// (`from:`, `since:`, `filter:media`, ...).
    pub async fn search(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<PaginatedResponse<Tweet>> {
        let request = Self::search_request(query, options.query_type);
        fetch_page(&self.inner, request, options.cursor.as_deref()).await
    }

    /// Stream search results across pages.
    ///
    /// Any cursor in `options` is ignored; the stream starts at the first page.
    pub fn search_all(
        &self,
        query: &str,
        options: SearchOptions,
        max_items: Option<usize>,
    ) -> PaginatedStream<Tweet> {
        stream_pages(
            self.inner.clone(),
            Self::search_request(query, options.query_type),
            max_items,
        )
    }

    /// Replies to a tweet.
    pub async fn replies(&self, id: &TweetId, cursor: Option<&str>) -> Result<PaginatedResponse<Tweet>> {
        fetch_page(&self.inner, Self::tweet_request(id, "replies"), cursor).await
    }

    /// Stream all replies to a tweet.
    pub fn replies_all(&self, id: &TweetId, max_items: Option<usize>) -> PaginatedStream<Tweet> {
        stream_pages(self.inner.clone(), Self::tweet_request(id, "replies"), max_items)
    }

    /// Tweets quoting a tweet.
    pub async fn quotes(&self, id: &TweetId, cursor: Option<&str>) -> Result<PaginatedResponse<Tweet>> {
        fetch_page(&self.inner, Self::tweet_request(id, "quotes"), cursor).await
    }

    /// Stream all tweets quoting a tweet.
    pub fn quotes_all(&self, id: &TweetId, max_items: Option<usize>) -> PaginatedStream<Tweet> {
        stream_pages(self.inner.clone(), Self::tweet_request(id, "quotes"), max_items)
    }

    /// Users who retweeted a tweet.
    pub async fn retweeters(&self, id: &TweetId, cursor: Option<&str>) -> Result<PaginatedResponse<User>> {
        fetch_page(&self.inner, Self::tweet_request(id, "retweeters"), cursor).await
    }

    /// Stream all users who retweeted a tweet.
    pub fn retweeters_all(&self, id: &TweetId, max_items: Option<usize>) -> PaginatedStream<User> {
        stream_pages(self.inner.clone(), Self::tweet_request(id, "retweeters"), max_items)
    }

    /// Users who liked a tweet.
    pub async fn favoriters(&self, id: &TweetId, cursor: Option<&str>) -> Result<PaginatedResponse<User>> {
        fetch_page(&self.inner, Self::tweet_request(id, "favoriters"), cursor).await
    }

    /// Stream all users who liked a tweet.
    pub fn favoriters_all(&self, id: &TweetId, max_items: Option<usize>) -> PaginatedStream<User> {
        stream_pages(self.inner.clone(), Self::tweet_request(id, "favoriters"), max_items)
    }

    fn tweet_request(id: &TweetId, listing: &str) -> Request {
        Request::get(format!("{TWITTER_PREFIX}/tweets/tweet"))
            .segment(id.as_str())
            .segment(listing)
    }

    fn search_request(query: &str, query_type: QueryType) -> Request {
        Request::get(format!("{TWITTER_PREFIX}/tweets/advanced_search"))
            .query("query", query)
            .query("query_type", query_type.as_str())
    }
}
