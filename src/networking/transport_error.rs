use crate::prelude::*;

/// Transport level conditions the [`NetworkService`] classification matches
/// against, independent of any platform's networking error domain.
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransportErrorCode {
    Cancelled,
    NotConnectedToInternet,
    TimedOut,
    CannotFindHost,
    CannotConnectToHost,
    NetworkConnectionLost,
    BadServerResponse,
    Unknown { code: i64 },
}

impl TransportErrorCode {
    /// Maps a Foundation `NSURLErrorDomain` code, as reported by `URLSession`.
    pub fn from_url_error_code(code: i64) -> Self {
        match code {
            -999 => Self::Cancelled,
            -1009 => Self::NotConnectedToInternet,
            -1001 => Self::TimedOut,
            -1003 => Self::CannotFindHost,
            -1004 => Self::CannotConnectToHost,
            -1005 => Self::NetworkConnectionLost,
            -1011 => Self::BadServerResponse,
            other => Self::Unknown { code: other },
        }
    }
}

/// The underlying error a transport reported, if any.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct TransportError {
    pub code: TransportErrorCode,
    pub message: String,
}

impl TransportError {
    pub fn new(code: TransportErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

/// Creates a [`TransportErrorCode`] from an `NSURLErrorDomain` code.
#[export]
pub fn new_transport_error_code_from_url_error_code(code: i64) -> TransportErrorCode {
    TransportErrorCode::from_url_error_code(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_foundation_codes() {
        assert_eq!(
            TransportErrorCode::from_url_error_code(-999),
            TransportErrorCode::Cancelled
        );
        assert_eq!(
            TransportErrorCode::from_url_error_code(-1009),
            TransportErrorCode::NotConnectedToInternet
        );
        assert_eq!(
            TransportErrorCode::from_url_error_code(-1001),
            TransportErrorCode::TimedOut
        );
        assert_eq!(
            TransportErrorCode::from_url_error_code(-1200),
            TransportErrorCode::Unknown { code: -1200 }
        );
    }
}
