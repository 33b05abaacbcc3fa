//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with the crate's standard [`ErrorResponse`] body.
//!
//! [`ErrorResponse`]: crate::errors::ErrorResponse

pub mod uuid_path;
pub mod validated_json;

pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
