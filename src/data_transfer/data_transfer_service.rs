use crate::prelude::*;

/// Requests through a [`NetworkService`] and decodes the bytes it emits.
#[derive(Debug)]
pub struct DataTransferService {
    network: NetworkService,
}

impl DataTransferService {
    pub fn new(network: NetworkService) -> Self {
        Self { network }
    }

    pub fn network(&self) -> &NetworkService {
        &self.network
    }

    /// Requests `endpoint` and decodes the response as JSON.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
    ) -> Result<T, DataTransferError> {
        self.request_with_decoder(endpoint, &JsonResponseDecoder)
            .await
    }

    pub async fn request_with_decoder<T, D>(
        &self,
        endpoint: &Endpoint,
        decoder: &D,
    ) -> Result<T, DataTransferError>
    where
        T: DeserializeOwned,
        D: ResponseDecoder,
    {
        let data = self.network.request(endpoint).await?;
        if data.is_empty() {
            return Err(DataTransferError::NoResponse);
        }
        decoder.decode(&data).inspect_err(|error| {
            warn!(%error, path = endpoint.path(), "failed to decode response");
        })
    }
}
