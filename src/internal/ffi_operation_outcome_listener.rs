use crate::prelude::*;

/// An object representing that Rust is listening on the outcome of an
/// operation carried out by FFI side (Swift side). When FFI side has finished
/// the operation it passes back the outcome by calling `notify_outcome`,
/// effectively a one-shot callback.
#[derive(Debug)]
pub struct FFIOperationOutcomeListener<R> {
    sender: Mutex<Option<Sender<R>>>,
}

impl<R> FFIOperationOutcomeListener<R> {
    pub(crate) fn new(sender: Sender<R>) -> Self {
        Self {
            sender: Mutex::new(Some(sender)),
        }
    }

    /// Passes `outcome` back to the awaiting dispatcher. Only the first call
    /// has an effect, and an outcome for a request which Rust side has
    /// since cancelled is discarded.
    pub(crate) fn notify_outcome(&self, outcome: R) {
        let Some(sender) = self
            .sender
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
        else {
            warn!("{}", RustSideError::OutcomeNotifiedMoreThanOnce);
            return;
        };

        if sender.send(outcome).is_err() {
            debug!("{}", RustSideError::DispatcherNoLongerAwaitingOutcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_outcome_is_delivered() {
        let (sender, receiver) = channel::<u8>();
        let sut = FFIOperationOutcomeListener::new(sender);
        sut.notify_outcome(1);
        sut.notify_outcome(2);
        assert_eq!(receiver.await, Ok(1));
    }

    #[test]
    fn outcome_after_receiver_dropped_does_not_panic() {
        let (sender, receiver) = channel::<u8>();
        let sut = FFIOperationOutcomeListener::new(sender);
        drop(receiver);
        sut.notify_outcome(1);
    }
}
