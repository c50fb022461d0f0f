use crate::prelude::*;

/// The transport a [`NetworkService`] issues its requests through.
///
/// Cancellation is cooperative: dropping the returned future abandons the
/// request, nothing is yielded afterwards.
#[async_trait]
pub trait SessionExecutor: Send + Sync {
    async fn execute(&self, request: ConcreteRequest) -> RawNetworkResult;
}

/// A deterministic transport returning the same [`RawNetworkResult`] for
/// every request, remembering the requests it was given.
#[derive(Debug)]
pub struct StubSessionExecutor {
    result: RawNetworkResult,
    requests: Mutex<Vec<ConcreteRequest>>,
}

impl StubSessionExecutor {
    pub fn new(result: RawNetworkResult) -> Self {
        Self {
            result,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with(
        data: Option<Vec<u8>>,
        response: Option<ResponseMetadata>,
        error: Option<TransportError>,
    ) -> Self {
        Self::new(RawNetworkResult::new(data, response, error))
    }

    /// The requests executed so far, oldest first.
    pub fn requests(&self) -> Vec<ConcreteRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl SessionExecutor for StubSessionExecutor {
    async fn execute(&self, request: ConcreteRequest) -> RawNetworkResult {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request);
        self.result.clone()
    }
}
