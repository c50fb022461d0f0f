use crate::prelude::*;

/// Dispatches networking requests to a [`FFINetworkingExecutor`] passed to
/// Rust from FFI side (Swift side), e.g. a `URLSession` wrapper, and awaits
/// the outcome it notifies back.
pub struct FFINetworkingDispatcher {
    /// Executor FFI side, receiving requests from us (Rust side), and passes
    /// the outcome back to us (Rust side).
    pub(crate) executor: Arc<dyn FFINetworkingExecutor>,
}

impl FFINetworkingDispatcher {
    pub fn new(executor: Arc<dyn FFINetworkingExecutor>) -> Self {
        Self { executor }
    }

    pub(crate) async fn dispatch(
        &self,
        request: FFINetworkingRequest,
    ) -> Result<RawNetworkResult, RustSideError> {
        // Underlying tokio channel used to get the outcome from Swift back to Rust.
        let (sender, receiver) = channel::<RawNetworkResult>();

        // Our callback we pass to Swift
        let listener = FFINetworkingOutcomeListener::with_listener(
            FFIOperationOutcomeListener::new(sender),
        );

        // Swift will call `listener.notify_outcome` once done
        self.executor
            .execute_networking_request(request, Arc::new(listener));

        receiver
            .await
            .map_err(|_| RustSideError::FailedToReceiveOutcomeFromFFI)
    }
}
