use crate::prelude::*;

/// Response caching policy, forwarded untouched to the transport (e.g.
/// `URLRequest.CachePolicy` on the host side).
#[derive(Enum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CachePolicy {
    #[default]
    UseProtocolCachePolicy,
    ReloadIgnoringLocalCacheData,
    ReturnCacheDataElseLoad,
    ReturnCacheDataDontLoad,
}
