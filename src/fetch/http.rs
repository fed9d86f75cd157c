//! Transport-neutral request and response values.

use http::header::{ACCEPT, USER_AGENT};
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use url::Url;

use super::HttpError;

/// Value of the `User-Agent` header sent with every bang list request.
pub const AGENT: &str = concat!("unbang/", env!("CARGO_PKG_VERSION"));

/// A request for a remote document.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Request method, `GET` for everything this crate sends
    pub method: Method,
    /// Absolute target
    pub url: Url,
    /// Extra headers
    pub headers: HeaderMap,
}

impl HttpRequest {
    /// Builds a bare request.
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
        }
    }

    /// Builds a bare `GET`.
    #[must_use]
    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    /// Builds a `GET` for a JSON document, identifying the caller as unbang.
    #[must_use]
    pub fn get_json(url: Url) -> Self {
        Self::get(url)
            .with_header(ACCEPT, HeaderValue::from_static("application/json"))
            .with_header(USER_AGENT, HeaderValue::from_static(AGENT))
    }

    /// Appends `value` under `name`, keeping earlier values.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// A response whose body has already been read to the end.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status line code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body bytes
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Wraps already-read response parts.
    #[must_use]
    pub const fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// `200 OK` with `body` and no headers.
    #[must_use]
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(StatusCode::OK, HeaderMap::new(), body.into())
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Sends requests over some transport.
///
/// The bang fetcher only depends on this trait, so tests can substitute
/// a scripted client for [`super::ReqwestClient`].
///
/// ```ignore
/// use unbang::fetch::{HttpClient, HttpError, HttpRequest, HttpResponse};
///
/// struct Canned(&'static [u8]);
///
/// impl HttpClient for Canned {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::ok(self.0))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends `req` and buffers the whole response.
    ///
    /// A non-2xx answer is still `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if no response could be obtained.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
