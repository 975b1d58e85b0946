//! Liveness endpoint.

use axum::Json;

use crate::models::ApiMessage;

/// GET /api/test - Basic liveness check.
///
/// Returns 200 immediately without touching storage.
pub async fn api_test() -> Json<ApiMessage> {
    Json(ApiMessage {
        message: "API is working".to_string(),
    })
}
