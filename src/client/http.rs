//! HTTP client implementation for the ScrapeBadger API.

use std::sync::Arc;

use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{
    CommunitiesService, GeoService, ListsService, TrendsService, TweetsService, UsersService,
};
use crate::{Error, Result};

use super::config::{ClientConfig, ClientOptions};
use super::request::Request;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// The main client for interacting with the ScrapeBadger API.
///
/// The client is cheap to clone; clones share one connection pool and one
/// configuration.
///
/// # Example
///
/// ```no_run
/// use scrapebadger::ScrapeBadgerClient;
///
/// # async fn example() -> scrapebadger::Result<()> {
/// let client = ScrapeBadgerClient::new("your-api-key")?;
///
/// let user = client.users().get_by_username("rustlang").await?;
/// println!("{} has {:?} followers", user.username, user.followers_count);
///
/// let page = client.tweets().search("#rustlang", Default::default()).await?;
/// for tweet in &page.data {
///     println!("{}", tweet.text);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ScrapeBadgerClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
}

/// Body and status of one completed HTTP exchange.
struct RawResponse {
    status: StatusCode,
    body: Value,
}

impl ScrapeBadgerClient {
    /// Create a client with an explicit API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_options(ClientOptions::new().with_api_key(api_key))
    }

    /// Create a client keyed from the `SCRAPEBADGER_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        Self::with_options(ClientOptions::new())
    }

    /// Create a client from options, resolving defaults and the environment.
    pub fn with_options(options: ClientOptions) -> Result<Self> {
        Self::with_config(options.resolve()?)
    }

    /// Create a client from an already resolved configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            inner: Arc::new(ClientInner { http, config }),
        })
    }

    /// Get the tweets service.
    pub fn tweets(&self) -> TweetsService {
        TweetsService::new(self.inner.clone())
    }

    /// Get the users service.
    pub fn users(&self) -> UsersService {
        UsersService::new(self.inner.clone())
    }

    /// Get the lists service.
    pub fn lists(&self) -> ListsService {
        ListsService::new(self.inner.clone())
    }

    /// Get the communities service.
    pub fn communities(&self) -> CommunitiesService {
        CommunitiesService::new(self.inner.clone())
    }

    /// Get the trends service.
    pub fn trends(&self) -> TrendsService {
        TrendsService::new(self.inner.clone())
    }

    /// Get the geo (places) service.
    pub fn geo(&self) -> GeoService {
        GeoService::new(self.inner.clone())
    }

    /// Execute an arbitrary request with the client's retry policy.
    ///
    /// Useful for endpoints that have no typed method yet.
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        self.inner.execute(request).await
    }

    /// The resolved configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(Request::get(path)).await
    }

    /// Execute a request, retrying transient failures.
    pub(crate) async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let url = self.build_url(&request)?;
        let headers = self.build_headers(&request)?;
        let body = request
            .body_for_send()
            .map(serde_json::to_string)
            .transpose()?;

        let retry = self.config.retry();

        for attempt in 0..=retry.max_retries {
            tracing::debug!(
                attempt,
                method = %request.method,
                path = %request.path,
                "Sending ScrapeBadger request"
            );

            let result = self
                .send_once(&request, &url, &headers, body.as_deref())
                .await
                .and_then(Self::classify);

            let err = match result {
                Ok(value) => return Ok(serde_json::from_value(value)?),
                Err(err) => err,
            };

            if !err.is_retryable() || attempt == retry.max_retries {
                return Err(err);
            }

            let delay = retry.delay_for(&err, attempt, Utc::now());
            tracing::warn!(
                attempt,
                max_retries = retry.max_retries,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "Retrying ScrapeBadger request"
            );
            tokio::time::sleep(delay).await;
        }

        Err(Error::Api {
            status: None,
            message: "request failed after exhausting retries".to_string(),
        })
    }

    /// Compose base URL, path, encoded segments and the non-absent query
    /// parameters.
    pub(crate) fn build_url(&self, request: &Request) -> Result<url::Url> {
        let mut url = url::Url::parse(&format!("{}{}", self.config.base_url(), request.path))?;

        if !request.segments.is_empty() {
            if let Some(bad) = request
                .segments
                .iter()
                .find(|s| matches!(s.as_str(), "" | "." | ".."))
            {
                return Err(Error::InvalidInput(format!(
                    "invalid path segment {bad:?} for {}",
                    request.path
                )));
            }

            url.path_segments_mut()
                .map_err(|_| Error::InvalidInput("base URL cannot carry a path".to_string()))?
                .pop_if_empty()
                .extend(&request.segments);
        }

        let mut pairs = request.query_pairs().peekable();
        if pairs.peek().is_some() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }

    /// Default headers with the caller's overrides applied on top.
    pub(crate) fn build_headers(&self, request: &Request) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            HeaderValue::from_str(self.config.api_key())
                .map_err(|_| Error::InvalidInput("Invalid API key format".to_string()))?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(self.config.user_agent())
                .map_err(|_| Error::InvalidInput("Invalid user agent".to_string()))?,
        );

        for (name, value) in &request.headers {
            headers.insert(name.clone(), value.clone());
        }

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(headers)
    }

    /// One attempt, bounded by the configured timeout. Dropping the future
    /// on timeout aborts the in-flight request.
    async fn send_once(
        &self,
        request: &Request,
        url: &url::Url,
        headers: &HeaderMap,
        body: Option<&str>,
    ) -> Result<RawResponse> {
        let mut builder = self
            .http
            .request(request.method.clone(), url.clone())
            .headers(headers.clone());
        if let Some(body) = body {
            builder = builder.body(body.to_string());
        }

        let exchange = async {
            let response = builder.send().await?;
            let status = response.status();
            let is_json = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(|ct| ct.contains("json"))
                .unwrap_or(false);
            let text = response.text().await?;

            Ok::<_, Error>(RawResponse {
                status,
                body: parse_body(&text, is_json),
            })
        };

        let timeout = self.config.timeout();
        match tokio::time::timeout(timeout, exchange).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout { timeout }),
        }
    }

    fn classify(raw: RawResponse) -> Result<Value> {
        if raw.status.is_success() {
            Ok(raw.body)
        } else {
            Err(Error::from_response(raw.status.as_u16(), &raw.body))
        }
    }
}

/// JSON bodies are parsed; anything else is wrapped as `{"detail": text}`.
fn parse_body(text: &str, is_json: bool) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    if is_json {
        if let Ok(value) = serde_json::from_str(text) {
            return value;
        }
    }
    serde_json::json!({ "detail": text })
}

impl std::fmt::Debug for ScrapeBadgerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrapeBadgerClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client_with_base(base: &str) -> ScrapeBadgerClient {
        let config = ClientOptions::new()
            .with_api_key("test-key")
            .with_base_url(base)
            .resolve_with(|_| None)
            .unwrap();
        ScrapeBadgerClient::with_config(config).unwrap()
    }

    #[test]
    fn test_build_url_with_query() {
        let client = client_with_base("https://api.example.com/");
        let request = Request::get("/v1/twitter/tweets/advanced_search")
            .query("query", "rust lang")
            .query_opt("cursor", None::<String>)
            .query("count", 20);

        let url = client.inner.build_url(&request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v1/twitter/tweets/advanced_search?query=rust+lang&count=20"
        );
    }

    #[test]
    fn test_build_url_without_query_has_no_question_mark() {
        let client = client_with_base("https://api.example.com");
        let url = client
            .inner
            .build_url(&Request::get("/v1/twitter/users/1"))
            .unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/twitter/users/1");
    }

    #[test]
    fn test_segments_are_encoded() {
        let client = client_with_base("https://api.example.com");
        let request = Request::get("/v1/twitter/users")
            .segment("search_users?x=#frag")
            .segment("a/b")
            .segment("by_username");

        let url = client.inner.build_url(&request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v1/twitter/users/search_users%3Fx=%23frag/a%2Fb/by_username"
        );
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_dot_segments_are_rejected() {
        let client = client_with_base("https://api.example.com");
        for bad in ["", ".", ".."] {
            let request = Request::get("/v1/twitter/users").segment(bad).segment("by_username");
            assert!(matches!(
                client.inner.build_url(&request),
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_headers_merge_overrides() {
        let client = client_with_base("https://api.example.com");
        let request = Request::get("/x")
            .try_header("X-Trace", "abc")
            .unwrap()
            .try_header("user-agent", "override/1.0")
            .unwrap()
            .try_header("content-type", "text/plain")
            .unwrap()
            .try_header("accept", "text/html")
            .unwrap();

        let headers = client.inner.build_headers(&request).unwrap();
        assert_eq!(headers[API_KEY_HEADER], "test-key");
        assert_eq!(headers["x-trace"], "abc");
        assert_eq!(headers[USER_AGENT], "override/1.0");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], "application/json");
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body("", true), Value::Null);
        assert_eq!(parse_body(r#"{"a":1}"#, true), json!({"a": 1}));
        assert_eq!(parse_body("Bad Gateway", false), json!({"detail": "Bad Gateway"}));
        assert_eq!(parse_body("<html>", true), json!({"detail": "<html>"}));
    }

    #[test]
    fn test_debug_hides_key() {
        let client = client_with_base("https://api.example.com");
        assert!(!format!("{client:?}").contains("test-key"));
    }
}
