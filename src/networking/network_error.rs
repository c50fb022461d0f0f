use crate::prelude::*;
use thiserror::Error as ThisError;

/// The classified failure of a request made by the [`NetworkService`].
///
/// Nothing is retried by this layer: `NotConnected` is transient and safe to
/// retry with backoff, `Cancelled` was caller initiated, `UrlGeneration` is a
/// caller bug, and whether a `Status` is worth retrying depends on its code.
#[derive(Debug, PartialEq, Eq, Clone, Error, ThisError, enum_as_inner::EnumAsInner)]
pub enum NetworkError {
    /// The server responded with a failure status code, `data` is whatever
    /// body came along with it, typically a machine readable error payload.
    #[error("Request failed with status code {status_code}")]
    Status {
        status_code: u16,
        data: Option<Vec<u8>>,
    },

    #[error("Not connected to the internet")]
    NotConnected,

    #[error("Request was cancelled")]
    Cancelled,

    #[error("Request failed: {underlying}")]
    Generic { underlying: TransportError },

    #[error("Failed to generate a URL request from endpoint")]
    UrlGeneration,
}

impl NetworkError {
    /// `true` only for [`NetworkError::Status`] with exactly `code`.
    pub fn has_status_code(&self, code: u16) -> bool {
        matches!(self, Self::Status { status_code, .. } if *status_code == code)
    }
}
