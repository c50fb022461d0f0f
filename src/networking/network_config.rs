use crate::prelude::*;
use thiserror::Error as ThisError;

/// Status codes at or above this value are classified as errors unless
/// configured otherwise.
pub const DEFAULT_SUCCESS_STATUS_THRESHOLD: u16 = 400;

fn default_success_status_threshold() -> u16 {
    DEFAULT_SUCCESS_STATUS_THRESHOLD
}

/// Process wide (or per service) configuration shared by all requests a
/// [`NetworkService`] makes.
///
/// Deserializable from JSON, only `base_url` is required:
///
/// ```json
/// { "base_url": "https://dummyjson.com", "headers": { "Accept": "application/json" } }
/// ```
#[derive(Record, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
    pub base_url: String,

    /// Sent with every request, endpoint headers win on collision.
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Appended to every request, endpoint query items win on collision.
    #[serde(default)]
    pub query_parameters: HashMap<String, String>,

    #[serde(default)]
    pub cache_policy: CachePolicy,

    /// Responses with a status code `>=` this value are failures.
    #[serde(default = "default_success_status_threshold")]
    pub success_status_threshold: u16,
}

impl NetworkConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            headers: HashMap::new(),
            query_parameters: HashMap::new(),
            cache_policy: CachePolicy::default(),
            success_status_threshold: DEFAULT_SUCCESS_STATUS_THRESHOLD,
        }
    }

    pub fn from_json(json: impl AsRef<str>) -> Result<Self, ConfigError> {
        serde_json::from_str(json.as_ref()).map_err(|e| ConfigError::InvalidJson {
            underlying: e.to_string(),
        })
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_query_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_parameters.insert(key.into(), value.into());
        self
    }

    pub fn with_cache_policy(mut self, cache_policy: CachePolicy) -> Self {
        self.cache_policy = cache_policy;
        self
    }

    pub fn with_success_status_threshold(mut self, threshold: u16) -> Self {
        self.success_status_threshold = threshold;
        self
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Error, ThisError)]
pub enum ConfigError {
    #[error("Invalid network config JSON: {underlying}")]
    InvalidJson { underlying: String },
}

/// Creates a [`NetworkConfig`] from its JSON representation, for hosts that
/// ship their configuration as a bundled file.
#[export]
pub fn new_network_config_from_json(json: String) -> Result<NetworkConfig, ConfigError> {
    NetworkConfig::from_json(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_only_requires_base_url() {
        let sut = NetworkConfig::from_json(r#"{ "base_url": "https://dummyjson.com" }"#).unwrap();
        assert_eq!(sut, NetworkConfig::new("https://dummyjson.com"));
        assert_eq!(sut.success_status_threshold, 400);
        assert_eq!(sut.cache_policy, CachePolicy::UseProtocolCachePolicy);
    }

    #[test]
    fn json_with_all_fields() {
        let sut = NetworkConfig::from_json(
            r#"{
                "base_url": "https://dummyjson.com",
                "headers": { "Accept": "application/json" },
                "query_parameters": { "api_key": "abc" },
                "cache_policy": "reload_ignoring_local_cache_data",
                "success_status_threshold": 300
            }"#,
        )
        .unwrap();
        assert_eq!(
            sut,
            NetworkConfig::new("https://dummyjson.com")
                .with_header("Accept", "application/json")
                .with_query_parameter("api_key", "abc")
                .with_cache_policy(CachePolicy::ReloadIgnoringLocalCacheData)
                .with_success_status_threshold(300)
        );
    }

    #[test]
    fn missing_base_url_is_an_error() {
        assert!(matches!(
            NetworkConfig::from_json("{}"),
            Err(ConfigError::InvalidJson { .. })
        ));
    }
}
