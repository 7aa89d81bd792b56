//! Feed domain: items, the loading contract, and wire-payload validation.

mod item;
pub use self::item::FeedItem;

mod error;
pub use self::error::LoadError;

mod mapper;

mod loader;
pub use self::loader::RemoteFeedLoader;
