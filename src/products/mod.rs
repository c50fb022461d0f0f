mod api_endpoints;
mod product_item_view_model;
mod products_request_dto;
mod products_response_dto;

pub use api_endpoints::*;
pub use product_item_view_model::*;
pub use products_request_dto::*;
pub use products_response_dto::*;
