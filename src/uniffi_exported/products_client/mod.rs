mod products_client;

pub use products_client::*;
