use crate::prelude::*;

/// An abstraction of a HTTP Network Request to be made FFI Side (Swift side),
/// e.g. by URLSession in Swift.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct FFINetworkingRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,

    /// `None` for requests without a body, e.g. all `GET` requests.
    pub body: Option<Vec<u8>>,
    pub cache_policy: CachePolicy,
}

impl From<ConcreteRequest> for FFINetworkingRequest {
    fn from(value: ConcreteRequest) -> Self {
        Self {
            url: value.url,
            method: value.method,
            headers: value.headers.into_iter().collect(),
            body: value.body,
            cache_policy: value.cache_policy,
        }
    }
}
