use url::Url;
use uuid::Uuid;

/// A single entry of the remote feed.
///
/// Constructed only by the decoding step from a fully validated payload;
/// immutable once built. Equality is structural over all fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    /// Globally unique identifier of the item.
    pub id: Uuid,
    /// Human-readable description, absent when the payload carried none.
    pub description: Option<String>,
    /// Location string, absent when the payload carried none.
    pub location: Option<String>,
    /// Resource identifier of the item's image.
    pub image_url: Url,
}

impl FeedItem {
    /// Creates an item from its parts.
    #[must_use]
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image_url,
        }
    }
}
