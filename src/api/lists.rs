//! Lists service.

use std::sync::Arc;

use crate::api::{fetch_page, stream_pages, TWITTER_PREFIX};
use crate::client::{ClientInner, PaginatedResponse, PaginatedStream, Request};
use crate::models::{ListId, Tweet, TwitterList, User};
use crate::Result;

/// Service for list details, timelines and membership.
#[derive(Clone)]
pub struct ListsService {
    inner: Arc<ClientInner>,
}

impl ListsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get list details.
    pub async fn get(&self, id: &ListId) -> Result<TwitterList> {
        self.inner.execute(Self::list_request(id, "detail")).await
    }

    /// Tweets from a list's timeline.
    pub async fn tweets(&self, id: &ListId, cursor: Option<&str>) -> Result<PaginatedResponse<Tweet>> {
        fetch_page(&self.inner, Self::tweets_request(id), cursor).await
    }

    /// Stream a list's timeline.
    pub fn tweets_all(&self, id: &ListId, max_items: Option<usize>) -> PaginatedStream<Tweet> {
        stream_pages(self.inner.clone(), Self::tweets_request(id), max_items)
    }

    /// List members.
    pub async fn members(&self, id: &ListId, cursor: Option<&str>) -> Result<PaginatedResponse<User>> {
        fetch_page(&self.inner, Self::members_request(id), cursor).await
    }

    /// Stream list members.
    pub fn members_all(&self, id: &ListId, max_items: Option<usize>) -> PaginatedStream<User> {
        stream_pages(self.inner.clone(), Self::members_request(id), max_items)
    }

    /// List subscribers.
    pub async fn subscribers(&self, id: &ListId, cursor: Option<&str>) -> Result<PaginatedResponse<User>> {
        fetch_page(&self.inner, Self::subscribers_request(id), cursor).await
    }

    /// Stream list subscribers.
    pub fn subscribers_all(&self, id: &ListId, max_items: Option<usize>) -> PaginatedStream<User> {
        stream_pages(self.inner.clone(), Self::subscribers_request(id), max_items)
    }

    /// Search lists by name.
    pub async fn search(&self, query: &str, cursor: Option<&str>) -> Result<PaginatedResponse<TwitterList>> {
        fetch_page(&self.inner, Self::search_request(query), cursor).await
    }

    /// Stream list search results.
    pub fn search_all(&self, query: &str, max_items: Option<usize>) -> PaginatedStream<TwitterList> {
        stream_pages(self.inner.clone(), Self::search_request(query), max_items)
    }

    fn tweets_request(id: &ListId) -> Request {
        Self::list_request(id, "tweets")
    }

    fn members_request(id: &ListId) -> Request {
        Self::list_request(id, "members")
    }

    fn subscribers_request(id: &ListId) -> Request {
        Self::list_request(id, "subscribers")
    }

    fn list_request(id: &ListId, listing: &str) -> Request {
        Request::get(format!("{TWITTER_PREFIX}/lists"))
            .segment(id.as_str())
            .segment(listing)
    }

    fn search_request(query: &str) -> Request {
        Request::get(format!("{TWITTER_PREFIX}/lists/search")).query("query", query)
    }
}
