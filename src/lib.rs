//! Catalogue service library modules.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by external tooling.
pub use doc::ApiDoc;
