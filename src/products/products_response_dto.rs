use crate::prelude::*;

//
// RESPONSE
//

/// A product as returned by `https://dummyjson.com/products`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDTO {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// The response of a call to `https://dummyjson.com/products`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ProductsResponseDTO {
    pub products: Vec<ProductDTO>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}
