//! Users service.

use std::sync::Arc;

use crate::api::{fetch_page, stream_pages, TWITTER_PREFIX};
use crate::client::{ClientInner, PaginatedResponse, PaginatedStream, Request};
use crate::models::{Tweet, User, UserId};
use crate::Result;

/// Service for user profiles, timelines and social graph.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: scrapebadger::ScrapeBadgerClient) -> scrapebadger::Result<()> {
/// let user = client.users().get_by_username("rustlang").await?;
///
/// // First 1000 followers
/// let followers = client
///     .users()
///     .followers_all(&user.username, Some(1000))
///     .collect_all()
///     .await?;
/// println!("fetched {} followers", followers.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct UsersService {
    inner: Arc<ClientInner>,
}

impl UsersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get a profile by handle (without `@`).
    pub async fn get_by_username(&self, username: &str) -> Result<User> {
        self.inner
            .execute(Self::user_request(username, "by_username"))
            .await
    }

    /// Get a profile by numeric ID.
    pub async fn get_by_id(&self, id: &UserId) -> Result<User> {
        let request = Request::get(format!("{TWITTER_PREFIX}/users")).segment(id.as_str());
        self.inner.execute(request).await
    }

    /// A user's most recent tweets.
    pub async fn tweets(&self, username: &str, cursor: Option<&str>) -> Result<PaginatedResponse<Tweet>> {
        fetch_page(&self.inner, Self::tweets_request(username), cursor).await
    }

    /// Stream a user's timeline.
    pub fn tweets_all(&self, username: &str, max_items: Option<usize>) -> PaginatedStream<Tweet> {
        stream_pages(self.inner.clone(), Self::tweets_request(username), max_items)
    }

    /// Accounts following a user.
    pub async fn followers(&self, username: &str, cursor: Option<&str>) -> Result<PaginatedResponse<User>> {
        fetch_page(&self.inner, Self::followers_request(username), cursor).await
    }

    /// Stream the accounts following a user.
    pub fn followers_all(&self, username: &str, max_items: Option<usize>) -> PaginatedStream<User> {
        stream_pages(self.inner.clone(), Self::followers_request(username), max_items)
    }

    /// Accounts a user follows.
    pub async fn followings(&self, username: &str, cursor: Option<&str>) -> Result<PaginatedResponse<User>> {
        fetch_page(&self.inner, Self::followings_request(username), cursor).await
    }

    /// Stream the accounts a user follows.
    pub fn followings_all(&self, username: &str, max_items: Option<usize>) -> PaginatedStream<User> {
        stream_pages(self.inner.clone(), Self::followings_request(username), max_items)
    }

    /// Search users by name or handle.
    pub async fn search(&self, query: &str, cursor: Option<&str>) -> Result<PaginatedResponse<User>> {
        fetch_page(&self.inner, Self::search_request(query), cursor).await
    }

    /// Stream user search results.
    pub fn search_all(&self, query: &str, max_items: Option<usize>) -> PaginatedStream<User> {
        stream_pages(self.inner.clone(), Self::search_request(query), max_items)
    }

    fn tweets_request(username: &str) -> Request {
        Self::user_request(username, "latest_tweets")
    }

    fn followers_request(username: &str) -> Request {
        Self::user_request(username, "followers")
    }

    fn followings_request(username: &str) -> Request {
        Self::user_request(username, "followings")
    }

    fn user_request(username: &str, resource: &str) -> Request {
        Request::get(format!("{TWITTER_PREFIX}/users"))
            .segment(username)
            .segment(resource)
    }

    fn search_request(query: &str) -> Request {
        Request::get(format!("{TWITTER_PREFIX}/users/search_users")).query("query", query)
    }
}
