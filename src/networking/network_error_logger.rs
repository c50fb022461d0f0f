use crate::prelude::*;

/// Side channel observing every request a [`NetworkService`] makes.
///
/// Implementations only observe, they must never influence the value or
/// timing of what the service emits, and they are called concurrently from
/// all in-flight requests. Within one request the order is fixed:
/// `log_request`, `log_response`, then `log_error` if the request failed.
pub trait NetworkErrorLogger: Send + Sync {
    fn log_request(&self, request: &ConcreteRequest);
    fn log_response(&self, data: Option<&[u8]>, response: Option<&ResponseMetadata>);
    fn log_error(&self, error: &NetworkError);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNetworkErrorLogger;

impl NetworkErrorLogger for NoopNetworkErrorLogger {
    fn log_request(&self, _request: &ConcreteRequest) {}
    fn log_response(&self, _data: Option<&[u8]>, _response: Option<&ResponseMetadata>) {}
    fn log_error(&self, _error: &NetworkError) {}
}

/// Console logger, emitting `tracing` events under the `catalog_net::network`
/// target. Requests and responses are `debug`, errors are `warn`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNetworkErrorLogger;

impl NetworkErrorLogger for TracingNetworkErrorLogger {
    fn log_request(&self, request: &ConcreteRequest) {
        let body = request.body.as_deref().map(String::from_utf8_lossy);
        debug!(
            target: "catalog_net::network",
            method = %request.method,
            url = %request.url,
            headers = ?request.headers,
            body = body.as_deref(),
            "request"
        );
    }

    fn log_response(&self, data: Option<&[u8]>, response: Option<&ResponseMetadata>) {
        let data = data.map(String::from_utf8_lossy);
        debug!(
            target: "catalog_net::network",
            status_code = response.map(|r| r.status_code),
            data = data.as_deref(),
            "response"
        );
    }

    fn log_error(&self, error: &NetworkError) {
        warn!(target: "catalog_net::network", %error, "request failed");
    }
}

/// One observation made by a [`CapturingNetworkErrorLogger`].
#[derive(Clone, Debug, PartialEq, Eq, enum_as_inner::EnumAsInner)]
pub enum LoggedEvent {
    Request(ConcreteRequest),
    Response {
        data: Option<Vec<u8>>,
        response: Option<ResponseMetadata>,
    },
    Error(NetworkError),
}

/// Records every observation in order, for assertions in tests.
#[derive(Debug, Default)]
pub struct CapturingNetworkErrorLogger {
    events: Mutex<Vec<LoggedEvent>>,
}

impl CapturingNetworkErrorLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LoggedEvent> {
        self.lock().clone()
    }

    pub fn requests(&self) -> Vec<ConcreteRequest> {
        self.events()
            .into_iter()
            .filter_map(|e| e.into_request().ok())
            .collect()
    }

    pub fn errors(&self) -> Vec<NetworkError> {
        self.events()
            .into_iter()
            .filter_map(|e| e.into_error().ok())
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LoggedEvent>> {
        // A panicking test thread must not hide the events of the others.
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, event: LoggedEvent) {
        self.lock().push(event);
    }
}

impl NetworkErrorLogger for CapturingNetworkErrorLogger {
    fn log_request(&self, request: &ConcreteRequest) {
        self.record(LoggedEvent::Request(request.clone()));
    }

    fn log_response(&self, data: Option<&[u8]>, response: Option<&ResponseMetadata>) {
        self.record(LoggedEvent::Response {
            data: data.map(<[u8]>::to_vec),
            response: response.cloned(),
        });
    }

    fn log_error(&self, error: &NetworkError) {
        self.record(LoggedEvent::Error(error.clone()));
    }
}
