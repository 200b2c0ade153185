/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - auth: TokenVerifier, guard: RouteGuard, session cookie 名
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::{auth::TokenVerifier, guard::RouteGuard};

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<dyn TokenVerifier>,
    pub guard: Arc<RouteGuard>,
    pub session_cookie_name: Arc<str>,
}

impl AppState {
    pub fn new(
        auth: Arc<dyn TokenVerifier>,
        guard: RouteGuard,
        session_cookie_name: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            auth,
            guard: Arc::new(guard),
            session_cookie_name: session_cookie_name.into(),
        }
    }
}
