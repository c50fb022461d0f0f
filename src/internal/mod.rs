mod ffi_networking_dispatcher;
mod ffi_operation_outcome_listener;
mod rust_side_error;

pub(crate) use ffi_networking_dispatcher::*;
pub(crate) use ffi_operation_outcome_listener::*;
pub(crate) use rust_side_error::*;
