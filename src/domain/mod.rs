//! Domain layer: catalogue entities, payload validation, and ports.
//!
//! Nothing in this module knows about HTTP or PostgreSQL. Inbound adapters
//! translate untrusted payloads through [`validation`] before constructing
//! entities; outbound adapters implement the repository traits in [`ports`].

pub mod category;
pub mod ports;
pub mod product;
pub mod validation;

pub use category::Category;
pub use product::Product;
pub use validation::FieldErrors;
