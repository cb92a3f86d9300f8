//! Error types for the catalog service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Catalog Error Enum ==
/// Unified error type for the catalog service.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Missing or invalid required field
    #[error("{0}")]
    Validation(String),

    /// Product id does not resolve
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Asset store rejected an upload
    #[error("Upload failed: {0}")]
    Upload(String),

    /// Asset store failed to delete an asset
    #[error("Asset delete failed: {0}")]
    Delete(String),

    /// Document store failure
    #[error("Store error: {0}")]
    Store(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// HTTP status this error maps to at the request boundary.
    pub fn status(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Upload(_) | CatalogError::Delete(_) => StatusCode::BAD_GATEWAY,
            CatalogError::Store(_) | CatalogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "success": false,
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog service.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CatalogError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatalogError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::Upload("x".into()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            CatalogError::Delete("x".into()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            CatalogError::Store("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = CatalogError::Validation("Please add Photo".into());
        assert_eq!(err.to_string(), "Please add Photo");
    }
}
