use crate::prelude::*;

/// A product as the host's list and details views display it.
#[derive(Record, Clone, Debug, PartialEq)]
pub struct ProductItemViewModel {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub price: f64,

    /// URL of the product's thumbnail.
    pub image: String,
}

impl From<ProductDTO> for ProductItemViewModel {
    fn from(value: ProductDTO) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            price: value.price,
            image: value.thumbnail,
        }
    }
}

/// One page of the product catalog.
#[derive(Record, Clone, Debug, PartialEq)]
pub struct ProductsPage {
    pub items: Vec<ProductItemViewModel>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

impl ProductsPage {
    /// Whether products beyond this page exist.
    pub fn has_more(&self) -> bool {
        u64::from(self.skip) + (self.items.len() as u64) < u64::from(self.total)
    }
}

impl From<ProductsResponseDTO> for ProductsPage {
    fn from(value: ProductsResponseDTO) -> Self {
        Self {
            items: value.products.into_iter().map(Into::into).collect(),
            total: value.total,
            skip: value.skip,
            limit: value.limit,
        }
    }
}
