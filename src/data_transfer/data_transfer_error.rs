use crate::prelude::*;
use thiserror::Error as ThisError;

#[derive(Debug, PartialEq, Eq, Clone, Error, ThisError, enum_as_inner::EnumAsInner)]
pub enum DataTransferError {
    #[error("Response contained no data")]
    NoResponse,

    #[error("Unable to decode response: {message}")]
    Parsing { message: String },

    #[error(transparent)]
    NetworkFailure {
        #[from]
        error: NetworkError,
    },
}

/// What the host's error view shows for a failed request.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct ErrorPresentation {
    pub title: String,
    pub description: String,
}

impl DataTransferError {
    pub fn presentation(&self) -> ErrorPresentation {
        match self {
            Self::NetworkFailure {
                error: NetworkError::NotConnected,
            } => ErrorPresentation {
                title: "No internet connection".to_owned(),
                description: "Check your connection and try again.".to_owned(),
            },
            _ => ErrorPresentation {
                title: "Failed loading products".to_owned(),
                description: self.to_string(),
            },
        }
    }
}

/// The [`ErrorPresentation`] for `error`.
#[export]
pub fn data_transfer_error_presentation(error: DataTransferError) -> ErrorPresentation {
    error.presentation()
}
