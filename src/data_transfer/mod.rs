mod data_transfer_error;
mod data_transfer_service;
mod response_decoder;

pub use data_transfer_error::*;
pub use data_transfer_service::*;
pub use response_decoder::*;
