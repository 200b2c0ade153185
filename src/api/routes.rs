/*
 * Responsibility
 * - URL 構造を定義
 * - 認可はここでは掛けない: middleware::guard がルーター全体を包む
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::handlers::{admin, auth_pages, dashboard, demo, fallback, health, home};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/admin", get(admin::overview))
        .route("/admin/users", get(admin::users))
        .route("/auth/signin", get(auth_pages::signin))
        .route("/auth/signup", get(auth_pages::signup))
        .route("/demo", get(demo::demo))
        .route("/api/health", get(health::health))
        .fallback(fallback::not_found)
}
