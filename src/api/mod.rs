//! API service modules for ScrapeBadger endpoints.
//!
//! Each service covers one Twitter resource. Listing methods return a single
//! [`PaginatedResponse`](crate::PaginatedResponse); their `*_all` companions
//! return a [`PaginatedStream`](crate::PaginatedStream) that follows cursors.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::client::{paginate, ClientInner, PaginateOptions, PaginatedResponse, PaginatedStream, Request};
use crate::Result;

mod communities;
mod geo;
mod lists;
mod trends;
mod tweets;
mod users;

pub use communities::{CommunitiesService, CommunityTweetsOptions};
pub use geo::{GeoSearchOptions, GeoService};
pub use lists::ListsService;
pub use trends::{TrendsOptions, TrendsService};
pub use tweets::{SearchOptions, TweetsService, MAX_TWEETS_PER_REQUEST};
pub use users::UsersService;

/// Common prefix of every Twitter endpoint.
pub(crate) const TWITTER_PREFIX: &str = "/v1/twitter";

/// Listing endpoint envelope without a cursor.
#[derive(serde::Deserialize)]
pub(crate) struct DataEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub(crate) data: Vec<T>,
}

/// Fetch one page of a cursor-paginated endpoint.
pub(crate) async fn fetch_page<T>(
    inner: &ClientInner,
    request: Request,
    cursor: Option<&str>,
) -> Result<PaginatedResponse<T>>
where
    T: DeserializeOwned,
{
    inner.execute(request.query_opt("cursor", cursor)).await
}

/// Stream every page of a cursor-paginated endpoint.
pub(crate) fn stream_pages<T>(
    inner: Arc<ClientInner>,
    request: Request,
    max_items: Option<usize>,
) -> PaginatedStream<T>
where
    T: DeserializeOwned + Send + 'static,
{
    paginate(
        move |cursor: Option<String>| {
            let inner = inner.clone();
            let request = request.clone();
            async move { fetch_page(&inner, request, cursor.as_deref()).await }
        },
        PaginateOptions { max_items },
    )
}
