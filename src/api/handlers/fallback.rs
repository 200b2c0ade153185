use axum::http::Uri;

use crate::error::AppError;

/// Unrouted paths. The guard has already run by the time this is reached.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(uri.path())
}
