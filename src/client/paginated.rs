//! Cursor-based pagination.
//!
//! Listing endpoints return one page at a time as a [`PaginatedResponse`].
//! [`paginate`] turns any page-fetching closure into a [`PaginatedStream`]
//! that follows `next_cursor` lazily, and [`collect_all`] drains a stream
//! into a `Vec`.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::{Stream, TryStreamExt};
use serde::{Deserialize, Serialize};

use crate::Result;

/// One page of results from a listing endpoint.
///
/// `has_more()` is derived from the cursor and cannot disagree with it.
///
/// ```
/// use scrapebadger::PaginatedResponse;
///
/// let last: PaginatedResponse<u32> = PaginatedResponse::new(vec![], None);
/// assert!(!last.has_more());
///
/// let page = PaginatedResponse::new(vec![1], Some("c".to_string()));
/// assert!(page.has_more());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PageEnvelope<T>")]
pub struct PaginatedResponse<T> {
    /// The items in this page.
    pub data: Vec<T>,
    /// Cursor for the next page, absent on the last page.
    pub next_cursor: Option<String>,
}

/// Wire shape of a listing response.
#[derive(Deserialize)]
struct PageEnvelope<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
    #[serde(default)]
    next_cursor: Option<String>,
}

impl<T> From<PageEnvelope<T>> for PaginatedResponse<T> {
    fn from(envelope: PageEnvelope<T>) -> Self {
        Self::new(envelope.data, envelope.next_cursor)
    }
}

impl<T> PaginatedResponse<T> {
    /// Build a page. An empty cursor is treated as absent.
    pub fn new(data: Vec<T>, next_cursor: Option<String>) -> Self {
        Self {
            data,
            next_cursor: next_cursor.filter(|c| !c.is_empty()),
        }
    }

    /// Whether another page follows this one.
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// Number of items in this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page has no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> IntoIterator for PaginatedResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Options for [`paginate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginateOptions {
    /// Stop after yielding this many items.
    pub max_items: Option<usize>,
}

impl PaginateOptions {
    /// Unbounded pagination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of yielded items.
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }
}

impl From<Option<usize>> for PaginateOptions {
    fn from(max_items: Option<usize>) -> Self {
        Self { max_items }
    }
}

/// Type alias for a boxed future used internally.
type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

type PageFuture<T> = BoxFuture<Result<PaginatedResponse<T>>>;

type FetchPage<T> = Box<dyn FnMut(Option<String>) -> PageFuture<T> + Send>;

/// A stream that lazily follows cursors through a paginated endpoint.
///
/// Pages are fetched only when the buffered items run out and the consumer
/// polls again, so dropping the stream never leaves a request in the
/// background. At most one page request is in flight. A failed fetch is
/// yielded once and ends the stream.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
///
/// # async fn example(client: scrapebadger::ScrapeBadgerClient) -> scrapebadger::Result<()> {
/// let mut followers = client.users().followers_all("rustlang", Some(500));
///
/// while let Some(user) = followers.next().await {
///     println!("{}", user?.username);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    fetch_page: FetchPage<T>,
    /// Items of the current page not yet yielded.
    buffer: VecDeque<T>,
    /// Cursor for the next fetch.
    cursor: Option<String>,
    /// Set once a page arrives without a cursor.
    exhausted: bool,
    /// Set once the stream has ended for any reason.
    finished: bool,
    pending_fetch: Option<PageFuture<T>>,
    max_items: Option<usize>,
    yielded: usize,
}

/// Follow cursors starting from the first page.
///
/// `fetch_page` receives `None` for the first page and the previous page's
/// `next_cursor` afterwards. Without `max_items` the stream runs until a page
/// has no cursor, which may be never.
pub fn paginate<T, F, Fut>(mut fetch_page: F, options: PaginateOptions) -> PaginatedStream<T>
where
    F: FnMut(Option<String>) -> Fut + Send + 'static,
    Fut: Future<Output = Result<PaginatedResponse<T>>> + Send + 'static,
{
    PaginatedStream {
        fetch_page: Box::new(move |cursor| Box::pin(fetch_page(cursor))),
        buffer: VecDeque::new(),
        cursor: None,
        exhausted: false,
        finished: false,
        pending_fetch: None,
        max_items: options.max_items,
        yielded: 0,
    }
}

/// Drain a stream into a `Vec`, stopping at the first error.
///
/// Only use this on bounded streams.
pub async fn collect_all<T, S>(stream: S) -> Result<Vec<T>>
where
    S: Stream<Item = Result<T>>,
{
    stream.try_collect().await
}

impl<T> PaginatedStream<T> {
    /// Number of items yielded so far.
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    /// Drain the remaining items into a `Vec`.
    pub async fn collect_all(self) -> Result<Vec<T>> {
        collect_all(self).await
    }

    fn cap_reached(&self) -> bool {
        matches!(self.max_items, Some(max) if self.yielded >= max)
    }

    fn finish(&mut self) {
        self.finished = true;
        self.buffer.clear();
        self.pending_fetch = None;
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if this.finished || this.cap_reached() {
                this.finish();
                return Poll::Ready(None);
            }

            if let Some(item) = this.buffer.pop_front() {
                this.yielded += 1;
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(fut) = this.pending_fetch.as_mut() {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending_fetch = None;
                        this.exhausted = !page.has_more();
                        this.cursor = page.next_cursor;
                        this.buffer.extend(page.data);
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.finish();
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            if this.exhausted {
                this.finish();
                return Poll::Ready(None);
            }

            tracing::trace!(cursor = ?this.cursor, yielded = this.yielded, "Fetching next page");
            this.pending_fetch = Some((this.fetch_page)(this.cursor.take()));
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

impl<T> std::fmt::Debug for PaginatedStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedStream")
            .field("cursor", &self.cursor)
            .field("buffered", &self.buffer.len())
            .field("yielded", &self.yielded)
            .field("max_items", &self.max_items)
            .field("finished", &self.finished)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use futures_util::StreamExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Serves `pages` in order, cursors "1", "2", ... and counts calls.
    fn fixture(
        pages: Vec<Vec<u32>>,
    ) -> (
        Arc<AtomicUsize>,
        impl FnMut(Option<String>) -> PageFuture<u32> + Send + 'static,
    ) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let fetch = move |cursor: Option<String>| -> PageFuture<u32> {
            counter.fetch_add(1, Ordering::SeqCst);
            let index: usize = cursor.map(|c| c.parse().unwrap()).unwrap_or(0);
            let data = pages[index].clone();
            let next = (index + 1 < pages.len()).then(|| (index + 1).to_string());
            Box::pin(async move { Ok(PaginatedResponse::new(data, next)) })
        };
        (calls, fetch)
    }

    #[test]
    fn test_has_more_is_derived() {
        let empty: PaginatedResponse<u32> = PaginatedResponse::new(vec![], None);
        assert!(!empty.has_more());
        assert!(PaginatedResponse::new(vec![1], Some("c".into())).has_more());
        assert!(!PaginatedResponse::new(vec![1], Some(String::new())).has_more());
    }

    #[test]
    fn test_deserialize_envelope() {
        let page: PaginatedResponse<u32> =
            serde_json::from_value(serde_json::json!({"data": [1, 2], "next_cursor": "abc"}))
                .unwrap();
        assert_eq!(page.data, vec![1, 2]);
        assert!(page.has_more());

        let last: PaginatedResponse<u32> =
            serde_json::from_value(serde_json::json!({"data": [3]})).unwrap();
        assert!(!last.has_more());

        let blank: PaginatedResponse<u32> =
            serde_json::from_value(serde_json::json!({"data": [], "next_cursor": ""})).unwrap();
        assert!(!blank.has_more());
    }

    #[tokio::test]
    async fn test_follows_all_pages_in_order() {
        let (calls, fetch) = fixture(vec![vec![1, 2], vec![3, 4], vec![5]]);

        let items = collect_all(paginate(fetch, PaginateOptions::new())).await.unwrap();

        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_max_items_stops_mid_page() {
        let (calls, fetch) = fixture(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);

        let items = paginate(fetch, PaginateOptions::new().with_max_items(4))
            .collect_all()
            .await
            .unwrap();

        assert_eq!(items, vec![1, 2, 3, 4]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_zero_cap_fetches_nothing() {
        let (calls, fetch) = fixture(vec![vec![1]]);

        let items = collect_all(paginate(fetch, PaginateOptions::new().with_max_items(0))).await.unwrap();

        assert!(items.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_no_prefetch() {
        let (calls, fetch) = fixture(vec![vec![1, 2], vec![3]]);
        let mut stream = paginate(fetch, PaginateOptions::new());

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(stream.next().await.unwrap().unwrap(), 1);
        assert_eq!(stream.next().await.unwrap().unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        drop(stream);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_page_with_cursor_is_followed() {
        let (calls, fetch) = fixture(vec![vec![], vec![1]]);

        let items = collect_all(paginate(fetch, PaginateOptions::new())).await.unwrap();

        assert_eq!(items, vec![1]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_each_call_starts_fresh() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));

        for _ in 0..2 {
            let seen = seen.clone();
            let fetch = move |cursor: Option<String>| {
                seen.lock().unwrap().push(cursor.clone());
                async move {
                    let next = cursor.is_none().then(|| "2".to_string());
                    let item = if next.is_some() { 1u32 } else { 2 };
                    Ok(PaginatedResponse::new(vec![item], next))
                }
            };

            let items = collect_all(paginate(fetch, PaginateOptions::new()))
                .await
                .unwrap();
            assert_eq!(items, vec![1, 2]);
        }

        assert_eq!(
            *seen.lock().unwrap(),
            vec![None, Some("2".to_string()), None, Some("2".to_string())]
        );
    }

    #[tokio::test]
    async fn test_error_ends_stream() {
        let mut served = 0;
        let fetch = move |_cursor: Option<String>| {
            served += 1;
            let first = served == 1;
            async move {
                if first {
                    Ok(PaginatedResponse::new(vec![1u32], Some("next".into())))
                } else {
                    Err(Error::Server {
                        status: 503,
                        message: "down".into(),
                    })
                }
            }
        };

        let mut stream = paginate(fetch, PaginateOptions::new());
        assert_eq!(stream.next().await.unwrap().unwrap(), 1);
        assert!(matches!(
            stream.next().await,
            Some(Err(Error::Server { status: 503, .. }))
        ));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_collect_all_plain_streams() {
        let empty = futures_util::stream::iter(Vec::<Result<u32>>::new());
        assert!(collect_all(empty).await.unwrap().is_empty());

        let items = futures_util::stream::iter(vec![Ok(1), Ok(2), Ok(3)]);
        assert_eq!(collect_all(items).await.unwrap(), vec![1, 2, 3]);
    }
}
