use crate::prelude::*;

/// A client of the product catalog API, making its network requests using a
/// "network antenna" installed from FFI side (Swift side), while building
/// requests, classifying errors, JSON parsing and mapping into view models
/// happens in Rust.
#[derive(Object, Debug)]
pub struct ProductsClient {
    data_transfer: DataTransferService,
}

impl ProductsClient {
    pub fn with_session(config: NetworkConfig, session: Arc<dyn SessionExecutor>) -> Self {
        Self {
            data_transfer: DataTransferService::new(NetworkService::new(config, session)),
        }
    }
}

#[export]
impl ProductsClient {
    /// Constructs a new [`ProductsClient`] using a "network antenna" - a type
    /// implementing [`FFINetworkingExecutor`] on the FFI side (Swift side), e.g.
    /// wrapping `URLSession`.
    #[uniffi::constructor]
    pub fn new(config: NetworkConfig, network_antenna: Arc<dyn FFINetworkingExecutor>) -> Self {
        Self::with_session(config, Arc::new(FFISessionExecutor::new(network_antenna)))
    }

    /// Fetches a page of `limit` products, skipping the first `skip`.
    pub async fn fetch_products(&self, limit: u32, skip: u32) -> Result<ProductsPage, DataTransferError> {
        let endpoint = ApiEndpoints::products(&ProductsRequestDTO { limit, skip })
            .map_err(|reason| self.data_transfer.network().generation_failed(&reason))?;
        self.data_transfer
            .request::<ProductsResponseDTO>(&endpoint)
            .await
            .map(ProductsPage::from)
    }

    pub async fn fetch_product(&self, id: u32) -> Result<ProductItemViewModel, DataTransferError> {
        self.data_transfer
            .request::<ProductDTO>(&ApiEndpoints::product_details(id))
            .await
            .map(ProductItemViewModel::from)
    }
}
