use crate::prelude::*;

/// The endpoints of the product catalog API.
pub struct ApiEndpoints;

impl ApiEndpoints {
    pub fn products(request: &ProductsRequestDTO) -> Result<Endpoint, RequestGenerationError> {
        Endpoint::builder("products", HttpMethod::Get)
            .query_encodable(request)
            .build()
    }

    pub fn product_details(id: u32) -> Endpoint {
        Endpoint::new(format!("products/{id}"), HttpMethod::Get)
    }
}
