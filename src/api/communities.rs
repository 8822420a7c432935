//! Communities service.

use std::sync::Arc;

use crate::api::{fetch_page, stream_pages, TWITTER_PREFIX};
use crate::client::{ClientInner, PaginatedResponse, PaginatedStream, Request};
use crate::models::{Community, CommunityId, CommunityTweetType, Tweet, User};
use crate::Result;

/// Service for communities.
///
/// # Example
///
/// ```no_run
/// use scrapebadger::api::CommunityTweetsOptions;
/// use scrapebadger::models::CommunityTweetType;
///
/// # async fn example(client: scrapebadger::ScrapeBadgerClient) -> scrapebadger::Result<()> {
/// let id = "1493446837214187523".into();
/// let community = client.communities().get(&id).await?;
///
/// let latest = client
///     .communities()
///     .tweets(&id, CommunityTweetsOptions::new().tweet_type(CommunityTweetType::Latest))
///     .await?;
/// println!("{}: {} tweets", community.name, latest.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CommunitiesService {
    inner: Arc<ClientInner>,
}

/// Options for [`CommunitiesService::tweets`].
#[derive(Debug, Clone, Default)]
pub struct CommunityTweetsOptions {
    /// Which tweets to list
    pub tweet_type: CommunityTweetType,
    /// Cursor from a previous page
    pub cursor: Option<String>,
}

impl CommunityTweetsOptions {
    /// Default options: top tweets, first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tweet type.
    pub fn tweet_type(mut self, tweet_type: CommunityTweetType) -> Self {
        self.tweet_type = tweet_type;
        self
    }

    /// Continue from a cursor.
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

impl CommunitiesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get community details.
    pub async fn get(&self, id: &CommunityId) -> Result<Community> {
        let request = Request::get(format!("{TWITTER_PREFIX}/communities")).segment(id.as_str());
        self.inner.execute(request).await
    }

    /// Tweets posted in a community.
    pub async fn tweets(
        &self,
        id: &CommunityId,
        options: CommunityTweetsOptions,
    ) -> Result<PaginatedResponse<Tweet>> {
        fetch_page(
            &self.inner,
            Self::tweets_request(id, options.tweet_type),
            options.cursor.as_deref(),
        )
        .await
    }

    /// Stream tweets posted in a community.
    pub fn tweets_all(
        &self,
        id: &CommunityId,
        tweet_type: CommunityTweetType,
        max_items: Option<usize>,
    ) -> PaginatedStream<Tweet> {
        stream_pages(self.inner.clone(), Self::tweets_request(id, tweet_type), max_items)
    }

    /// Community members.
    pub async fn members(&self, id: &CommunityId, cursor: Option<&str>) -> Result<PaginatedResponse<User>> {
        fetch_page(&self.inner, Self::members_request(id), cursor).await
    }

    /// Stream community members.
    pub fn members_all(&self, id: &CommunityId, max_items: Option<usize>) -> PaginatedStream<User> {
        stream_pages(self.inner.clone(), Self::members_request(id), max_items)
    }

    /// Search communities by name.
    pub async fn search(&self, query: &str, cursor: Option<&str>) -> Result<PaginatedResponse<Community>> {
        fetch_page(&self.inner, Self::search_request(query), cursor).await
    }

    /// Stream community search results.
    pub fn search_all(&self, query: &str, max_items: Option<usize>) -> PaginatedStream<Community> {
        stream_pages(self.inner.clone(), Self::search_request(query), max_items)
    }

    fn tweets_request(id: &CommunityId, tweet_type: CommunityTweetType) -> Request {
        Self::community_request(id, "tweets")
            .query("tweet_type", tweet_type.as_str())
    }

    fn members_request(id: &CommunityId) -> Request {
        Self::community_request(id, "members")
    }

    fn community_request(id: &CommunityId, listing: &str) -> Request {
        Request::get(format!("{TWITTER_PREFIX}/communities"))
            .segment(id.as_str())
            .segment(listing)
    }

    fn search_request(query: &str) -> Request {
        Request::get(format!("{TWITTER_PREFIX}/communities/search")).query("query", query)
    }
}
