use crate::prelude::*;

/// Turns the raw bytes of a successful response into a value.
pub trait ResponseDecoder: Send + Sync {
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, DataTransferError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct JsonResponseDecoder;

impl ResponseDecoder for JsonResponseDecoder {
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, DataTransferError> {
        serde_json::from_slice::<T>(data).map_err(|e| DataTransferError::Parsing {
            message: format!(
                "Unable to JSON deserialize into type {}: {e}",
                std::any::type_name::<T>()
            ),
        })
    }
}
