use thiserror::Error;

/// Errors surfaced by the DIAL client facade.
#[derive(Error, Debug)]
pub enum DialError {
    /// A settings value could not be resolved, e.g. a non-numeric timeout.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The HTTP transport could not be constructed.
    ///
    /// Surfaced on the first network-calling operation (or when building a
    /// [`crate::adapter::DialChatModel`] handle), never at crate load.
    #[error("transport unavailable: {0}")]
    Unavailable(String),

    /// A message in the input sequence could not be normalized. The call
    /// aborts before any network activity.
    #[error("invalid message at index {index}: {reason}")]
    InvalidMessage { index: usize, reason: String },

    /// The provider call failed. Covers transport, authentication,
    /// provider-side and decode failures uniformly; the underlying cause is
    /// carried as text.
    #[error("DIAL API call failed: {0}")]
    Call(String),
}
