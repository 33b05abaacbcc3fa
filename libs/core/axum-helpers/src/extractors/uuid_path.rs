//! UUID path parameter extractor.

use crate::errors::{ErrorCode, error_response};
use axum::{
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Extractor for a single UUID path parameter.
///
/// A value that does not parse as a UUID is rejected with `400` and an
/// `INVALID_UUID` error body before the handler runs.
///
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::UuidPath;
///
/// async fn get_product(UuidPath(id): UuidPath) -> String {
///     id.to_string()
/// }
///
/// let app: Router = Router::new().route("/{id}", get(get_product));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        Uuid::parse_str(&raw).map(UuidPath).map_err(|_| {
            tracing::info!(
                error_code = ErrorCode::InvalidUuid.code(),
                path_value = %raw,
                "Rejected malformed UUID path parameter"
            );
            error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid UUID: {}", raw),
                ErrorCode::InvalidUuid,
            )
        })
    }
}
