use crate::prelude::*;

/// Query of a page of products, sent as `?limit=&skip=`.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductsRequestDTO {
    pub limit: u32,
    pub skip: u32,
}

impl Default for ProductsRequestDTO {
    fn default() -> Self {
        Self { limit: 30, skip: 0 }
    }
}
