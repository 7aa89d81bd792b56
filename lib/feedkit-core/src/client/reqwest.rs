use tracing::debug;
use url::Url;

use super::{HttpClient, HttpClientError, HttpResponse};

/// Transport capability backed by a shared [`reqwest::Client`].
///
/// The wrapped client owns connection pooling, TLS, timeouts, and redirect
/// policy; none of that leaks through the [`HttpClient`] contract. Cloning is
/// cheap and clones share the same pool.
///
/// # Example
///
/// ```rust,no_run
/// use feedkit_core::{HttpClient, ReqwestHttpClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestHttpClient::new();
/// let url = "https://api.example.com/feed".parse()?;
/// let response = client.get(&url).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Creates a transport with a default reqwest client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport around an already configured reqwest client.
    ///
    /// Use this to control timeouts, proxies, or redirect policy.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, HttpClientError> {
        debug!(%url, "sending...");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        let url = response.url().clone();
        let body = response.bytes().await?;
        debug!(%status, bytes = body.len(), "...receiving");

        Ok(HttpResponse::new(status, url, body))
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use axum::routing::get;
    use axum::{Json, Router};
    use http::StatusCode;
    use serde_json::json;
    use tracing::error;

    use super::*;

    fn init_tracing() {
        // Another test may have set the global default already.
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    async fn serve(app: Router) -> anyhow::Result<Url> {
        let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
        let base = format!("http://{}/", listener.local_addr()?).parse()?;
        tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app).await {
                error!(%err, "test server stopped");
            }
        });
        Ok(base)
    }

    #[tokio::test]
    async fn test_get_delivers_status_body_and_url() -> anyhow::Result<()> {
        init_tracing();
        let app = Router::new().route("/feed", get(|| async { Json(json!({"items": []})) }));
        let url = serve(app).await?.join("feed")?;

        let client = ReqwestHttpClient::new();
        let response = client.get(&url).await?;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), br#"{"items":[]}"#);
        assert_eq!(response.url(), &url);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_delivers_non_200_statuses_as_responses() -> anyhow::Result<()> {
        init_tracing();
        let app = Router::new().route("/feed", get(|| async { StatusCode::NOT_FOUND }));
        let url = serve(app).await?.join("feed")?;

        let client = ReqwestHttpClient::new();
        let response = client.get(&url).await?;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_reports_connection_errors() -> anyhow::Result<()> {
        init_tracing();
        // Bind then drop the listener so the port is known to be closed.
        let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
        let url: Url = format!("http://{}/feed", listener.local_addr()?).parse()?;
        drop(listener);

        let client = ReqwestHttpClient::new();
        let outcome = client.get(&url).await;

        assert!(matches!(outcome, Err(HttpClientError::ReqwestError(_))));
        Ok(())
    }
}
