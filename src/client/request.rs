//! Request descriptors consumed by the request engine.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// String value
    Str(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value, sent as `true`/`false`
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(i) => write!(f, "{i}"),
            QueryValue::Float(x) => write!(f, "{x}"),
            QueryValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Str(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Str(s)
    }
}

impl From<&String> for QueryValue {
    fn from(s: &String) -> Self {
        QueryValue::Str(s.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Bool(b)
    }
}

impl From<f64> for QueryValue {
    fn from(x: f64) -> Self {
        QueryValue::Float(x)
    }
}

macro_rules! int_query_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(i: $ty) -> Self {
                    QueryValue::Int(i as i64)
                }
            }
        )*
    };
}

int_query_value!(i32, i64, u32, u64, usize);

/// Description of one API call: method, path, query, body and extra headers.
///
/// The path is a fixed route. Values supplied by callers (handles, IDs) go
/// through [`segment`](Self::segment), which appends them percent-encoded so
/// they can never change the route. Query parameters keep their insertion
/// order. Parameters added with an absent value are dropped when the URL is
/// built.
///
/// # Example
///
/// ```
/// use scrapebadger::Request;
///
/// let request = Request::get("/v1/twitter/tweets/advanced_search")
///     .query("query", "rust lang")
///     .query("count", 20)
///     .query_opt("cursor", None::<String>);
///
/// assert_eq!(request.path(), "/v1/twitter/tweets/advanced_search");
///
/// let user = Request::get("/v1/twitter/users").segment("a/b?c").segment("by_username");
/// assert_eq!(user.segments(), ["a/b?c", "by_username"]);
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) segments: Vec<String>,
    pub(crate) query: Vec<(String, Option<QueryValue>)>,
    pub(crate) body: Option<Value>,
    pub(crate) headers: HeaderMap,
}

impl Request {
    /// Create a request with the given method and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            segments: Vec::new(),
            query: Vec::new(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    /// Create a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Create a PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Create a PATCH request.
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Create a DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append one path segment, percent-encoded when the URL is built.
    ///
    /// `/`, `?` and `#` inside `segment` stay part of the segment. Empty,
    /// `.` and `..` segments are rejected with [`Error::InvalidInput`].
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.push((key.into(), Some(value.into())));
        self
    }

    /// Add a query parameter that is omitted when `value` is `None`.
    pub fn query_opt<V: Into<QueryValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.query.push((key.into(), value.map(Into::into)));
        self
    }

    /// Set a JSON body. Ignored for GET requests.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize `body` as the JSON body.
    pub fn json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self> {
        Ok(self.body(serde_json::to_value(body)?))
    }

    /// Add or replace a header.
    ///
    /// `Content-Type` and `Accept` are always set by the client and cannot be
    /// overridden.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Add or replace a header from strings.
    pub fn try_header(self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| Error::InvalidInput(format!("invalid header name: {name}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| Error::InvalidInput(format!("invalid value for header {name}")))?;
        Ok(self.header(name, value))
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path segments appended after [`path`](Self::path), unencoded.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Query parameters that will be sent, in order, stringified.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, String)> {
        self.query
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.as_str(), v.to_string())))
    }

    /// The body to send, if any. Always `None` for GET.
    pub fn body_for_send(&self) -> Option<&Value> {
        if self.method == Method::GET {
            None
        } else {
            self.body.as_ref()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_query_values_are_skipped() {
        let request = Request::get("/x")
            .query("a", "1")
            .query_opt("b", None::<&str>)
            .query_opt("c", Some(3u32))
            .query("d", true);

        let pairs: Vec<_> = request.query_pairs().collect();
        assert_eq!(
            pairs,
            vec![
                ("a", "1".to_string()),
                ("c", "3".to_string()),
                ("d", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_value_display() {
        assert_eq!(QueryValue::from(false).to_string(), "false");
        assert_eq!(QueryValue::from(-7i64).to_string(), "-7");
        assert_eq!(QueryValue::from(1.5).to_string(), "1.5");
        assert_eq!(QueryValue::from("x y").to_string(), "x y");
    }

    #[test]
    fn test_get_never_sends_body() {
        let get = Request::get("/x").body(json!({"a": 1}));
        assert!(get.body_for_send().is_none());

        let post = Request::post("/x").body(json!({"a": 1}));
        assert_eq!(post.body_for_send(), Some(&json!({"a": 1})));
    }

    #[test]
    fn test_json_body() {
        #[derive(Serialize)]
        struct Payload {
            ids: Vec<u32>,
        }

        let request = Request::patch("/x").json(&Payload { ids: vec![1, 2] }).unwrap();
        assert_eq!(request.body_for_send(), Some(&json!({"ids": [1, 2]})));
    }

    #[test]
    fn test_try_header_rejects_invalid() {
        assert!(Request::get("/x").try_header("X-Trace", "abc").is_ok());
        let err = Request::get("/x").try_header("bad header", "v").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
