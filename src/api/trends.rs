//! Trends service.

use std::sync::Arc;

use crate::api::{DataEnvelope, TWITTER_PREFIX};
use crate::client::{ClientInner, PaginatedResponse, Request};
use crate::models::{Location, PlaceTrends, Trend, TrendCategory};
use crate::Result;

/// Service for trending topics.
///
/// # Example
///
/// ```no_run
/// use scrapebadger::api::TrendsOptions;
/// use scrapebadger::models::TrendCategory;
///
/// # async fn example(client: scrapebadger::ScrapeBadgerClient) -> scrapebadger::Result<()> {
/// let trends = client
///     .trends()
///     .get(TrendsOptions::new().category(TrendCategory::News))
///     .await?;
/// for trend in trends {
///     println!("{} ({:?})", trend.name, trend.tweet_count);
/// }
///
/// // Worldwide
/// let world = client.trends().place(1).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TrendsService {
    inner: Arc<ClientInner>,
}

/// Options for [`TrendsService::get`].
#[derive(Debug, Clone, Default)]
pub struct TrendsOptions {
    /// Trends tab
    pub category: TrendCategory,
    /// Maximum number of trends
    pub count: Option<u32>,
}

impl TrendsOptions {
    /// Default options: the general trending tab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category.
    pub fn category(mut self, category: TrendCategory) -> Self {
        self.category = category;
        self
    }

    /// Limit the number of trends.
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

impl TrendsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Current trends for a category.
    ///
    /// The endpoint is not paginated, so the returned page never has a cursor.
    pub async fn get(&self, options: TrendsOptions) -> Result<PaginatedResponse<Trend>> {
        let request = Request::get(format!("{TWITTER_PREFIX}/trends"))
            .query("category", options.category.as_str())
            .query_opt("count", options.count);

        self.inner.execute(request).await
    }

    /// Trends for a location, by WOEID (1 is worldwide).
    pub async fn place(&self, woeid: u64) -> Result<PlaceTrends> {
        self.inner
            .get(&format!("{TWITTER_PREFIX}/trends/place/{woeid}"))
            .await
    }

    /// Locations for which trends are available.
    pub async fn locations(&self) -> Result<Vec<Location>> {
        let response: DataEnvelope<Location> = self
            .inner
            .get(&format!("{TWITTER_PREFIX}/trends/locations"))
            .await?;
        Ok(response.data)
    }
}
