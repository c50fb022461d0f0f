use crate::prelude::*;

/// Status code and headers of a response.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct ResponseMetadata {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
}

impl ResponseMetadata {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: HashMap::new(),
        }
    }
}

/// What a [`SessionExecutor`] yields for a request: any combination of body
/// bytes, response metadata and transport error.
#[derive(Record, Clone, Debug, Default, PartialEq, Eq)]
pub struct RawNetworkResult {
    pub data: Option<Vec<u8>>,
    pub response: Option<ResponseMetadata>,
    pub error: Option<TransportError>,
}

impl RawNetworkResult {
    pub fn new(
        data: Option<Vec<u8>>,
        response: Option<ResponseMetadata>,
        error: Option<TransportError>,
    ) -> Self {
        Self {
            data,
            response,
            error,
        }
    }

    pub fn success(status_code: u16, data: impl Into<Vec<u8>>) -> Self {
        Self::new(Some(data.into()), Some(ResponseMetadata::new(status_code)), None)
    }

    pub fn transport_failure(error: TransportError) -> Self {
        Self::new(None, None, Some(error))
    }

    pub fn status_code(&self) -> Option<u16> {
        self.response.as_ref().map(|r| r.status_code)
    }

    /// Classifies this result into the bytes to emit or a [`NetworkError`].
    ///
    /// Missing data on success is an empty payload, never a failure.
    pub fn classify(self, success_status_threshold: u16) -> Result<Vec<u8>, NetworkError> {
        let status_code = self.status_code();
        let is_error_status = status_code.is_some_and(|code| code >= success_status_threshold);

        let Some(underlying) = self.error else {
            return match status_code {
                Some(status_code) if is_error_status => Err(NetworkError::Status {
                    status_code,
                    data: self.data,
                }),
                _ => Ok(self.data.unwrap_or_default()),
            };
        };

        match (underlying.code, status_code) {
            (TransportErrorCode::Cancelled, _) => Err(NetworkError::Cancelled),
            (TransportErrorCode::NotConnectedToInternet, _) => Err(NetworkError::NotConnected),
            (_, Some(status_code)) if is_error_status => Err(NetworkError::Status {
                status_code,
                data: self.data,
            }),
            _ => Err(NetworkError::Generic { underlying }),
        }
    }
}
