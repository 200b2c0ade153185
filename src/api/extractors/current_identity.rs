use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::Identity;
use crate::error::AppError;

/// Handler で、検証済み Identity を受け取るための extractor
/// middleware::guard が pass-through 時に extensions へ insert 済みである前提
/// 見つからない場合は 401 を返す (公開パスで使った・ガード未設定)
pub struct CurrentIdentity(pub Identity);

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(CurrentIdentity)
            .ok_or(AppError::Unauthorized)
    }
}
