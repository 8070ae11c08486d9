//! HTTP inbound adapter exposing the catalogue REST endpoints.

pub mod categories;
pub mod error;
pub mod products;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::{ApiError, ApiResult};
