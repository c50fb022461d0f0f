use thiserror::Error as ThisError;

/// Failure to turn an [`Endpoint`] and a [`NetworkConfig`] into a
/// [`ConcreteRequest`]. Always a caller bug, surfaced by the
/// [`NetworkService`] as [`NetworkError::UrlGeneration`].
#[derive(Debug, PartialEq, Eq, Clone, ThisError)]
pub enum RequestGenerationError {
    #[error("Failed to create URL from string: '{url}'")]
    InvalidUrl { url: String },

    #[error("Encodable of type '{type_name}' did not serialize into a JSON object")]
    EncodableIsNotAnObject { type_name: String },

    #[error("Failed to encode parameters: {underlying}")]
    EncodingFailed { underlying: String },

    #[error("ASCII body encoder was given non ASCII parameters")]
    NonAsciiBody,
}
