use thiserror::Error as ThisError;

/// Failures of the FFI bridge itself, as opposed to failures FFI side
/// reports. Never cross the FFI boundary as such.
#[derive(Debug, PartialEq, Eq, Clone, ThisError)]
pub enum RustSideError {
    #[error("FFI side dropped the outcome listener without notifying an outcome")]
    FailedToReceiveOutcomeFromFFI,

    #[error("FFI side notified an outcome more than once, ignored")]
    OutcomeNotifiedMoreThanOnce,

    #[error("Outcome notified after Rust side stopped awaiting it, discarded")]
    DispatcherNoLongerAwaitingOutcome,
}
