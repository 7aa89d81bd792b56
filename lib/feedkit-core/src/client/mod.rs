//! Transport capability: one GET request, exactly one asynchronous outcome.
//!
//! This module provides:
//!
//! - [`HttpClient`] - the trait the rest of the crate consumes
//! - [`HttpResponse`] - the raw outcome of a delivered response
//! - [`HttpClientError`] - transport-level failures, opaque to domain callers
//! - [`ReqwestHttpClient`] - the concrete transport backed by `reqwest`

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;
use http::StatusCode;
use url::Url;

mod error;
pub use self::error::HttpClientError;

mod reqwest;
pub use self::reqwest::ReqwestHttpClient;

/// Raw outcome of one delivered HTTP response.
///
/// Transient value: it exists only for the duration of a single load and is
/// never persisted. Status-code interpretation belongs to the validation
/// layer, not to the transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: StatusCode,
    url: Url,
    body: Bytes,
}

impl HttpResponse {
    /// Creates a response from its status, originating URL, and byte payload.
    pub fn new(status: StatusCode, url: Url, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            url,
            body: body.into(),
        }
    }

    /// HTTP status code of the response.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// URL the response was delivered from.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Raw byte payload of the response body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Capability to issue a single GET request for a resource identifier.
///
/// Each call is independent: no deduplication, no shared request state, no
/// retries, and no timeout policy at this layer. Implementations deliver
/// exactly one outcome per call by resolving the returned future. Dropping
/// that future before it resolves discards the outcome.
///
/// Implemented by [`ReqwestHttpClient`] for production use and by scripted
/// test doubles in the test suites.
pub trait HttpClient {
    /// Issues one GET request and resolves with the transport outcome.
    fn get(&self, url: &Url) -> impl Future<Output = Result<HttpResponse, HttpClientError>> + Send;
}

impl<C: HttpClient + Sync + ?Sized> HttpClient for &C {
    async fn get(&self, url: &Url) -> Result<HttpResponse, HttpClientError> {
        (**self).get(url).await
    }
}

impl<C: HttpClient + Send + Sync + ?Sized> HttpClient for Arc<C> {
    async fn get(&self, url: &Url) -> Result<HttpResponse, HttpClientError> {
        (**self).get(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_exposes_its_parts() {
        let url: Url = "https://a-given.example.com/feed"
            .parse()
            .expect("valid url");
        let response = HttpResponse::new(StatusCode::OK, url.clone(), b"payload".to_vec());

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.url(), &url);
        assert_eq!(response.body(), b"payload");
    }

    #[test]
    fn test_http_response_is_cheap_to_clone() {
        let url: Url = "https://a-given.example.com/feed"
            .parse()
            .expect("valid url");
        let response = HttpResponse::new(StatusCode::OK, url, Bytes::from_static(b"payload"));
        let clone = response.clone();

        assert_eq!(clone.body(), response.body());
    }
}
