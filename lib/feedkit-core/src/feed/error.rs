/// Domain-level failure of a feed load.
///
/// The loading contract classifies every failure into exactly two kinds;
/// underlying transport errors and parser diagnostics are deliberately not
/// carried across this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum LoadError {
    /// The transport failed to deliver a response.
    #[display("could not connect to the feed")]
    Connectivity,

    /// A response was delivered but rejected by validation or decoding.
    ///
    /// Covers non-200 statuses, malformed payloads, missing required fields,
    /// and malformed identifiers or URLs alike.
    #[display("the feed response was invalid")]
    InvalidData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<LoadError>();
        assert_sync::<LoadError>();
    }
}
