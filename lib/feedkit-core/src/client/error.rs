/// Errors a transport can report instead of delivering a response.
///
/// These are transport-level values: the loading contract never exposes them.
/// The orchestrator collapses every variant into
/// [`LoadError::Connectivity`](crate::feed::LoadError::Connectivity).
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum HttpClientError {
    /// HTTP client error from the underlying reqwest library.
    ///
    /// Occurs when network requests fail, timeouts occur, or connection issues
    /// arise.
    ReqwestError(reqwest::Error),

    /// Transport failed without a more specific cause.
    ///
    /// Used by transports that are not backed by reqwest, including scripted
    /// test doubles.
    #[display("transport failure: {message}")]
    #[from(skip)]
    Transport {
        /// Description of the transport failure.
        message: String,
    },
}
