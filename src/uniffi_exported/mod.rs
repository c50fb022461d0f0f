mod networking;
mod products_client;

pub use networking::*;
pub use products_client::*;
