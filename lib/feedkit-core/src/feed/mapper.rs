//! Pure validation and decoding of the feed wire payload.
//!
//! No I/O happens here: the mapper takes raw bytes plus the response status
//! and produces either the full ordered item list or [`LoadError::InvalidData`].
//! Decoding is all-or-nothing; a single malformed record rejects the whole
//! payload.

use http::StatusCode;
use serde::Deserialize;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use super::{FeedItem, LoadError};

/// Wire payload: a single object with an ordered `items` collection.
///
/// Unknown extra fields are ignored at both levels.
#[derive(Debug, Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

/// One wire record, decoded strictly: required fields must be present and
/// well-formed, optional fields map absent and explicit `null` to `None`.
#[derive(Debug, Deserialize)]
struct RemoteFeedItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl From<RemoteFeedItem> for FeedItem {
    fn from(remote: RemoteFeedItem) -> Self {
        let RemoteFeedItem {
            id,
            description,
            location,
            image,
        } = remote;
        Self::new(id, description, location, image)
    }
}

/// Validates one raw response and decodes it into feed items.
///
/// Any status other than 200 is invalid, uniformly: 1xx, 3xx, 4xx, and 5xx
/// are not classified further. An empty `items` collection is a valid
/// success. Output order matches payload order.
pub(super) fn map(body: &[u8], status: StatusCode) -> Result<Vec<FeedItem>, LoadError> {
    if status != StatusCode::OK {
        debug!(%status, "rejecting non-200 response");
        return Err(LoadError::InvalidData);
    }

    let deserializer = &mut serde_json::Deserializer::from_slice(body);
    let root: Root = serde_path_to_error::deserialize(deserializer).map_err(|err| {
        debug!(path = %err.path(), "rejecting undecodable payload");
        LoadError::InvalidData
    })?;

    Ok(root.items.into_iter().map(FeedItem::from).collect())
}
