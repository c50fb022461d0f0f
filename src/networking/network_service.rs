use crate::prelude::*;

/// Makes requests described by [`Endpoint`]s through a [`SessionExecutor`],
/// classifying every outcome into bytes or a [`NetworkError`].
///
/// Holds no per request state, a single instance can serve any number of
/// concurrent requests.
pub struct NetworkService {
    config: Arc<NetworkConfig>,
    session: Arc<dyn SessionExecutor>,
    logger: Arc<dyn NetworkErrorLogger>,
}

impl NetworkService {
    /// A service logging through [`TracingNetworkErrorLogger`].
    pub fn new(config: NetworkConfig, session: Arc<dyn SessionExecutor>) -> Self {
        Self::with_logger(config, session, Arc::new(TracingNetworkErrorLogger))
    }

    pub fn with_logger(
        config: NetworkConfig,
        session: Arc<dyn SessionExecutor>,
        logger: Arc<dyn NetworkErrorLogger>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            session,
            logger,
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Performs the request and resolves to exactly one terminal value.
    ///
    /// Dropping the future before it resolves cancels the request: nothing
    /// is logged or emitted for it afterwards.
    #[tracing::instrument(skip_all, fields(method = %endpoint.method(), path = endpoint.path()))]
    pub async fn request(&self, endpoint: &Endpoint) -> Result<Vec<u8>, NetworkError> {
        let request = match endpoint.concrete_request(&self.config) {
            Ok(request) => request,
            Err(reason) => return Err(self.generation_failed(&reason)),
        };

        self.logger.log_request(&request);

        let raw = self.session.execute(request).await;
        self.logger.log_response(raw.data.as_deref(), raw.response.as_ref());

        raw.classify(self.config.success_status_threshold)
            .map_err(|error| {
                self.logger.log_error(&error);
                error
            })
    }

    /// Logs an [`Endpoint`] that could not be built as the terminal
    /// [`NetworkError::UrlGeneration`] of a request that never started.
    pub fn generation_failed(&self, reason: &RequestGenerationError) -> NetworkError {
        debug!(%reason, "failed to build request");
        let error = NetworkError::UrlGeneration;
        self.logger.log_error(&error);
        error
    }

    /// Spawns the request onto the current tokio runtime, returning a handle
    /// which can be awaited or cancelled independently of other requests.
    ///
    /// # Panics
    /// Panics if called outside of a tokio runtime.
    pub fn spawn_request(self: &Arc<Self>, endpoint: Endpoint) -> RequestHandle {
        let service = Arc::clone(self);
        RequestHandle::new(tokio::spawn(async move {
            service.request(&endpoint).await
        }))
    }
}

impl std::fmt::Debug for NetworkService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
