/*
 * Responsibility
 * - /auth/signin, /auth/signup のプレースホルダ
 * - 認証済みの場合はガードが /dashboard へ飛ばすので、ここに来るのは未認証のみ
 */
use axum::Json;

use crate::api::dto::pages::AuthPageResponse;

pub async fn signin() -> Json<AuthPageResponse> {
    Json(AuthPageResponse { page: "signin" })
}

pub async fn signup() -> Json<AuthPageResponse> {
    Json(AuthPageResponse { page: "signup" })
}
