pub mod client;
mod coerce;
pub mod error;
pub mod normalize;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use normalize::{normalize_entry, normalize_payload};
