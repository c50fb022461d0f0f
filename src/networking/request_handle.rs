use crate::prelude::*;
use tokio::task::JoinHandle;

/// A request spawned by [`NetworkService::spawn_request`].
#[derive(Debug)]
pub struct RequestHandle {
    task: JoinHandle<Result<Vec<u8>, NetworkError>>,
}

impl RequestHandle {
    pub(crate) fn new(task: JoinHandle<Result<Vec<u8>, NetworkError>>) -> Self {
        Self { task }
    }

    /// Cancels the request if it has not finished yet. Other requests are
    /// unaffected.
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the terminal value, `None` if the request was cancelled
    /// before it produced one.
    pub async fn outcome(self) -> Option<Result<Vec<u8>, NetworkError>> {
        match self.task.await {
            Ok(outcome) => Some(outcome),
            Err(error) if error.is_cancelled() => None,
            Err(error) => std::panic::resume_unwind(error.into_panic()),
        }
    }
}
