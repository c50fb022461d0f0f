use crate::prelude::*;

/// A [`SessionExecutor`] making its requests FFI side through a
/// [`FFINetworkingExecutor`].
pub struct FFISessionExecutor {
    dispatcher: FFINetworkingDispatcher,
}

impl FFISessionExecutor {
    pub fn new(network_antenna: Arc<dyn FFINetworkingExecutor>) -> Self {
        Self {
            dispatcher: FFINetworkingDispatcher::new(network_antenna),
        }
    }
}

#[async_trait]
impl SessionExecutor for FFISessionExecutor {
    async fn execute(&self, request: ConcreteRequest) -> RawNetworkResult {
        self.dispatcher
            .dispatch(request.into())
            .await
            .unwrap_or_else(|error| {
                RawNetworkResult::transport_failure(TransportError::new(
                    TransportErrorCode::Unknown { code: 0 },
                    error.to_string(),
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SilentAntenna;
    impl FFINetworkingExecutor for SilentAntenna {
        fn execute_networking_request(
            &self,
            _request: FFINetworkingRequest,
            _listener_rust_side: Arc<FFINetworkingOutcomeListener>,
        ) {
        }
    }

    struct EchoAntenna;
    impl FFINetworkingExecutor for EchoAntenna {
        fn execute_networking_request(
            &self,
            request: FFINetworkingRequest,
            listener_rust_side: Arc<FFINetworkingOutcomeListener>,
        ) {
            listener_rust_side.notify_outcome(RawNetworkResult::success(200, request.url));
        }
    }

    fn request() -> ConcreteRequest {
        Endpoint::builder("products", HttpMethod::Get)
            .query_parameter("limit", 1)
            .build()
            .unwrap()
            .concrete_request(&NetworkConfig::new("https://dummyjson.com"))
            .unwrap()
    }

    #[tokio::test]
    async fn outcome_notified_by_antenna_is_returned() {
        let sut = FFISessionExecutor::new(Arc::new(EchoAntenna));
        let result = sut.execute(request()).await;
        assert_eq!(
            result,
            RawNetworkResult::success(200, "https://dummyjson.com/products?limit=1")
        );
    }

    #[tokio::test]
    async fn dropped_listener_is_a_transport_failure() {
        let sut = FFISessionExecutor::new(Arc::new(SilentAntenna));
        let result = sut.execute(request()).await;
        assert_eq!(
            result.error.map(|e| e.code),
            Some(TransportErrorCode::Unknown { code: 0 })
        );
        assert_eq!(result.response, None);
    }

    #[test]
    fn request_is_converted_for_ffi() {
        let converted = FFINetworkingRequest::from(request());
        assert_eq!(converted.url, "https://dummyjson.com/products?limit=1");
        assert_eq!(converted.method, HttpMethod::Get);
        assert_eq!(converted.body, None);
        assert_eq!(converted.cache_policy, CachePolicy::UseProtocolCachePolicy);
    }
}
