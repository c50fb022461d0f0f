use crate::prelude::*;

#[derive(Object, Debug)]
pub struct FFINetworkingOutcomeListener {
    listener: FFIOperationOutcomeListener<RawNetworkResult>,
}

impl FFINetworkingOutcomeListener {
    pub(crate) fn with_listener(listener: FFIOperationOutcomeListener<RawNetworkResult>) -> Self {
        Self { listener }
    }
}

#[export]
impl FFINetworkingOutcomeListener {
    /// This is called from FFI Side (Swift side), inside the implementation of
    /// `execute_networking_request` on a [`FFINetworkingExecutor`], when the
    /// request has finished, with whatever data, response and error
    /// `URLSession` produced.
    pub fn notify_outcome(&self, result: RawNetworkResult) {
        self.listener.notify_outcome(result)
    }
}
