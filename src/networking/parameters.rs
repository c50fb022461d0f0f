use crate::prelude::*;

/// Query or body parameters of an [`Endpoint`].
///
/// Exactly one representation is authoritative: field-wise parameters or the
/// flattened properties of a single encodable object. Once an encodable object
/// has been set it takes precedence, later field-wise inserts are ignored.
#[derive(Clone, Debug, Default, PartialEq, enum_as_inner::EnumAsInner)]
pub enum Parameters {
    #[default]
    None,
    Fields(Map<String, Value>),
    Encodable(Map<String, Value>),
}

impl Parameters {
    pub(crate) fn insert_field(&mut self, key: impl Into<String>, value: Value) {
        match self {
            Self::Encodable(_) => {}
            Self::Fields(fields) => {
                fields.insert(key.into(), value);
            }
            Self::None => {
                let mut fields = Map::new();
                fields.insert(key.into(), value);
                *self = Self::Fields(fields);
            }
        }
    }

    /// Serializes `encodable` into a JSON object and makes it the
    /// authoritative representation.
    pub(crate) fn set_encodable<T: Serialize>(
        &mut self,
        encodable: &T,
    ) -> Result<(), RequestGenerationError> {
        let value = serde_json::to_value(encodable).map_err(|e| {
            RequestGenerationError::EncodingFailed {
                underlying: e.to_string(),
            }
        })?;
        match value {
            Value::Object(properties) => {
                *self = Self::Encodable(properties);
                Ok(())
            }
            _ => Err(RequestGenerationError::EncodableIsNotAnObject {
                type_name: std::any::type_name::<T>().to_owned(),
            }),
        }
    }

    /// The authoritative key/value pairs, regardless of representation.
    pub fn as_map(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::None => None,
            Self::Fields(map) | Self::Encodable(map) => Some(map),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_map().map_or(true, |m| m.is_empty())
    }

    /// Flattens the parameters into key -> string pairs, `null` values are
    /// skipped and non-string values are rendered as JSON text.
    pub(crate) fn flattened(&self) -> BTreeMap<String, String> {
        self.as_map()
            .into_iter()
            .flatten()
            .filter_map(|(key, value)| {
                parameter_value_string(value).map(|v| (key.clone(), v))
            })
            .collect()
    }
}

pub(crate) fn parameter_value_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
