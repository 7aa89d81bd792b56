//! # Feedkit Core
//!
//! Load a remote feed over HTTP and hand callers validated domain objects or a
//! typed failure.
//!
//! This crate is the boundary between network transport and feed domain logic:
//! callers depend on the loading contract of [`RemoteFeedLoader`], never on
//! transport details. Three pieces compose top-down:
//!
//! - **[`HttpClient`]** - the transport capability: one GET request, exactly
//!   one asynchronous outcome
//! - **feed mapper** - a pure validation/decoding step enforcing the wire
//!   contract (internal to [`feed`])
//! - **[`RemoteFeedLoader`]** - the orchestrator exposing [`load`](RemoteFeedLoader::load)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use feedkit_core::{RemoteFeedLoader, ReqwestHttpClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "https://api.example.com/feed".parse()?;
//! let loader = RemoteFeedLoader::new(ReqwestHttpClient::new(), url);
//!
//! let items = loader.load().await?;
//! for item in &items {
//!     println!("{} -> {}", item.id, item.image_url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Model
//!
//! Callers see exactly two failure kinds, both carried by [`LoadError`]:
//! [`Connectivity`](LoadError::Connectivity) when the transport never produced
//! a usable response, and [`InvalidData`](LoadError::InvalidData) when a
//! response arrived but was rejected by validation or decoding. Underlying
//! transport errors and parser diagnostics are never surfaced through the
//! loading contract.
//!
//! ## Cancellation
//!
//! There is no cancellation API. Dropping the future returned by
//! [`RemoteFeedLoader::load`] before the transport outcome arrives suppresses
//! delivery entirely: the outcome is discarded, never reported as an error.

pub mod client;
pub mod feed;

pub use self::client::{HttpClient, HttpClientError, HttpResponse, ReqwestHttpClient};
pub use self::feed::{FeedItem, LoadError, RemoteFeedLoader};
