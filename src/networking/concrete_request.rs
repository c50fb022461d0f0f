use crate::prelude::*;

/// A fully resolved request, ready to be handed to a [`SessionExecutor`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConcreteRequest {
    /// The resolved URL string, sent as is.
    pub url: String,
    pub method: HttpMethod,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
    pub cache_policy: CachePolicy,
}
