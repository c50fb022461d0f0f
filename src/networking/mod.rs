mod body_encoder;
mod cache_policy;
mod concrete_request;
mod endpoint;
mod http_method;
mod network_config;
mod network_error;
mod network_error_logger;
mod network_service;
mod parameters;
mod raw_network_result;
mod request_builder;
mod request_generation_error;
mod request_handle;
mod session_executor;
mod transport_error;

pub use body_encoder::*;
pub use cache_policy::*;
pub use concrete_request::*;
pub use endpoint::*;
pub use http_method::*;
pub use network_config::*;
pub use network_error::*;
pub use network_error_logger::*;
pub use network_service::*;
pub use parameters::*;
pub use raw_network_result::*;
pub use request_generation_error::*;
pub use request_handle::*;
pub use session_executor::*;
pub use transport_error::*;
