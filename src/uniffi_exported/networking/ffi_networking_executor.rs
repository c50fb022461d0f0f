use crate::prelude::*;

/// The "network antenna": a type FFI side (Swift side) implements, e.g. by
/// wrapping `URLSession`, to execute network requests on behalf of Rust.
#[uniffi::export(with_foreign)]
pub trait FFINetworkingExecutor: Send + Sync {
    /// Rust tells the executor to make `request` by calling this function.
    /// Once the request has finished, successfully or not, FFI side MUST
    /// pass back the outcome exactly once, using `listener_rust_side`.
    ///
    /// Transport failures are reported inside the [`RawNetworkResult`], e.g.
    /// `NSURLErrorNotConnectedToInternet` as
    /// [`TransportErrorCode::NotConnectedToInternet`].
    fn execute_networking_request(
        &self,
        request: FFINetworkingRequest,
        listener_rust_side: Arc<FFINetworkingOutcomeListener>,
    );
}
