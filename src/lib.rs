//! The networking core of a product catalog app.
//!
//! Endpoints are described declaratively with [`Endpoint`], compiled into
//! [`ConcreteRequest`]s against a [`NetworkConfig`], and executed by a
//! [`NetworkService`] through a pluggable [`SessionExecutor`]. On mobile the
//! executor is the host itself (e.g. `URLSession`), plugged in over UniFFI as
//! a [`FFINetworkingExecutor`]. Raw outcomes are classified into a
//! [`NetworkError`] taxonomy, observed by a [`NetworkErrorLogger`], decoded by
//! the [`DataTransferService`] and mapped into view models such as
//! [`ProductItemViewModel`].

mod data_transfer;
mod internal;
mod logging;
mod networking;
mod products;
mod uniffi_exported;

pub mod prelude {
    pub use crate::data_transfer::*;
    pub use crate::logging::*;
    pub use crate::networking::*;
    pub use crate::products::*;
    pub use crate::uniffi_exported::*;

    pub(crate) use crate::internal::*;

    pub(crate) use async_trait::async_trait;
    pub(crate) use serde::{de::DeserializeOwned, Deserialize, Serialize};
    pub(crate) use serde_json::{Map, Value};
    pub(crate) use std::collections::{BTreeMap, HashMap};
    pub(crate) use std::sync::{Arc, Mutex};
    pub(crate) use tokio::sync::oneshot::{channel, Sender};
    pub(crate) use tracing::{debug, warn};
    pub(crate) use uniffi::{export, Enum, Error, Object, Record};
    pub(crate) use url::Url;
}

pub use prelude::*;

uniffi::setup_scaffolding!();
