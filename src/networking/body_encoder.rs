use crate::prelude::*;

/// How the body parameters of an [`Endpoint`] are serialized into bytes.
///
/// Chosen explicitly per endpoint, never inferred from the parameters.
#[derive(Enum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BodyEncoder {
    /// A JSON object, `Content-Type: application/json`.
    #[default]
    Json,

    /// `application/x-www-form-urlencoded` pairs joined by `&`.
    UrlEncodedForm,

    /// Plain `key=value` pairs joined by `&`, without any escaping. The
    /// result must be ASCII.
    Ascii,
}

impl BodyEncoder {
    /// The `Content-Type` header value this encoder produces, if any.
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Json => Some("application/json"),
            Self::UrlEncodedForm => Some("application/x-www-form-urlencoded"),
            Self::Ascii => None,
        }
    }

    pub fn encode(&self, parameters: &Map<String, Value>) -> Result<Vec<u8>, RequestGenerationError> {
        match self {
            Self::Json => serde_json::to_vec(parameters).map_err(|e| {
                RequestGenerationError::EncodingFailed {
                    underlying: e.to_string(),
                }
            }),
            Self::UrlEncodedForm => {
                let mut serializer = url::form_urlencoded::Serializer::new(String::new());
                for (key, value) in parameters {
                    if let Some(value) = parameter_value_string(value) {
                        serializer.append_pair(key, &value);
                    }
                }
                Ok(serializer.finish().into_bytes())
            }
            Self::Ascii => {
                let joined = parameters
                    .iter()
                    .filter_map(|(key, value)| {
                        parameter_value_string(value).map(|v| format!("{key}={v}"))
                    })
                    .collect::<Vec<_>>()
                    .join("&");
                if !joined.is_ascii() {
                    return Err(RequestGenerationError::NonAsciiBody);
                }
                Ok(joined.into_bytes())
            }
        }
    }
}
