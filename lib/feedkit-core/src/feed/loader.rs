use url::Url;

use crate::client::HttpClient;

use super::{FeedItem, LoadError, mapper};

/// Loads the remote feed from a fixed resource identifier.
///
/// Holds only immutable configuration: the transport capability and the
/// target URL. Nothing is cached and no in-flight state is tracked, so
/// concurrent [`load`](Self::load) calls on one loader are causally
/// independent.
///
/// # Example
///
/// ```rust,no_run
/// use feedkit_core::{RemoteFeedLoader, ReqwestHttpClient};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let url = "https://api.example.com/feed".parse()?;
/// let loader = RemoteFeedLoader::new(ReqwestHttpClient::new(), url);
/// let items = loader.load().await?;
/// println!("loaded {} item(s)", items.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RemoteFeedLoader<C> {
    client: C,
    url: Url,
}

impl<C> RemoteFeedLoader<C> {
    /// Creates a loader for the given transport and feed URL.
    ///
    /// Performs no I/O; the first request is issued by [`load`](Self::load).
    pub fn new(client: C, url: Url) -> Self {
        Self { client, url }
    }
}

impl<C: HttpClient> RemoteFeedLoader<C> {
    /// Issues one request and resolves with the validated feed.
    ///
    /// Exactly one transport request per call. A transport failure resolves
    /// to [`LoadError::Connectivity`]; a delivered response resolves to the
    /// validation verdict, either the full ordered item list or
    /// [`LoadError::InvalidData`]. Dropping the returned future before the
    /// transport outcome arrives suppresses delivery entirely.
    pub async fn load(&self) -> Result<Vec<FeedItem>, LoadError> {
        match self.client.get(&self.url).await {
            Ok(response) => mapper::map(response.body(), response.status()),
            Err(_) => Err(LoadError::Connectivity),
        }
    }
}
