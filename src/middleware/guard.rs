//! Route guard → pass-through か redirect を適用する
//!
//! - 除外パス (`/api*`, `/_next/static*` など) はトークンを見ずにそのまま流す
//! - トークンは `Authorization: Bearer` → session cookie の順で探す (検証に通った最初のもの)
//! - 検証に失敗したトークンは「無し」として扱う (401 にはしない)
//! - pass-through 時は検証済み `Identity` を extensions に入れる

use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::domain::Identity;
use crate::state::AppState;

/// Wrap the whole application router with the route guard.
///
/// Must be applied after routes and fallback are registered.
pub fn apply(router: Router, state: AppState) -> Router {
    router.layer(middleware::from_fn_with_state(state, guard_middleware))
}

async fn guard_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();

    if state.guard.is_excluded(&path) {
        return next.run(req).await;
    }

    let identity = resolve_identity(&state, req.headers(), &jar);
    let outcome = state.guard.decide(&path, identity.as_ref());

    if let Some(target) = outcome.redirect_target() {
        tracing::debug!(path = %path, location = target, "route guard redirect");
        return Redirect::temporary(target).into_response();
    }

    // middleware → extractor への受け渡し
    if let Some(identity) = identity {
        req.extensions_mut().insert(identity);
    }

    next.run(req).await
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Bearer header first, then the session cookie. A candidate that fails
/// verification is skipped, so a stale header does not hide a valid cookie.
fn resolve_identity(state: &AppState, headers: &HeaderMap, jar: &CookieJar) -> Option<Identity> {
    let cookie = jar
        .get(&state.session_cookie_name)
        .map(|c| c.value())
        .filter(|v| !v.is_empty());

    [("bearer", bearer_token(headers)), ("cookie", cookie)]
        .into_iter()
        .filter_map(|(source, token)| token.map(|t| (source, t)))
        .find_map(|(source, token)| match state.auth.verify(token) {
            Ok(identity) => Some(identity),
            Err(err) => {
                tracing::warn!(source, error = %err, "identity token rejected");
                None
            }
        })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        Extension,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::services::auth::{TokenError, TokenVerifier};
    use crate::services::guard::{ExclusionFilter, RouteGuard, RuleSet};

    /// テスト用スタブ: `<role>-token` を受け付ける
    #[derive(Debug)]
    struct StubVerifier;

    impl TokenVerifier for StubVerifier {
        fn verify(&self, token: &str) -> Result<Identity, TokenError> {
            match token.strip_suffix("-token") {
                Some(role) if !role.is_empty() => Ok(Identity::new("user-1", role)),
                _ => Err(TokenError::EmptyClaim("sub")),
            }
        }
    }

    async fn echo_role(identity: Option<Extension<Identity>>) -> String {
        identity
            .map(|Extension(i)| i.role)
            .unwrap_or_else(|| "anonymous".to_string())
    }

    fn create_test_app(guard: RouteGuard) -> Router {
        let state = AppState::new(Arc::new(StubVerifier), guard, "session-token");
        let router = Router::new()
            .route("/admin/users", get(echo_role))
            .fallback(echo_role);
        apply(router, state)
    }

    fn get_request(uri: &str) -> axum::http::request::Builder {
        Request::builder().method("GET").uri(uri)
    }

    async fn send(app: Router, req: axum::http::request::Builder) -> Response {
        app.oneshot(req.body(Body::empty()).unwrap()).await.unwrap()
    }

    async fn body_text(res: Response) -> String {
        let bytes = to_bytes(res.into_body(), 1024).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(res: &Response) -> Option<&str> {
        res.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn admin_token_reaches_admin_handler_with_identity() {
        let app = create_test_app(RouteGuard::default());
        let res = send(
            app,
            get_request("/admin/users").header(header::AUTHORIZATION, "Bearer admin-token"),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_text(res).await, "admin");
    }

    #[tokio::test]
    async fn non_admin_is_sent_to_sign_in() {
        let app = create_test_app(RouteGuard::default());
        let res = send(
            app,
            get_request("/admin/users").header(header::AUTHORIZATION, "Bearer nurse-token"),
        )
        .await;

        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&res), Some("/auth/signin"));
    }

    #[tokio::test]
    async fn session_cookie_is_accepted() {
        let app = create_test_app(RouteGuard::default());
        let res = send(
            app,
            get_request("/auth/signin").header(header::COOKIE, "theme=dark; session-token=nurse-token"),
        )
        .await;

        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&res), Some("/dashboard"));
    }

    #[tokio::test]
    async fn bearer_header_takes_precedence_over_cookie() {
        let app = create_test_app(RouteGuard::default());
        let res = send(
            app,
            get_request("/admin/users")
                .header(header::AUTHORIZATION, "Bearer nurse-token")
                .header(header::COOKIE, "session-token=admin-token"),
        )
        .await;

        assert_eq!(location(&res), Some("/auth/signin"));
    }

    #[tokio::test]
    async fn rejected_bearer_falls_back_to_cookie() {
        let app = create_test_app(RouteGuard::default());
        let res = send(
            app,
            get_request("/dashboard")
                .header(header::AUTHORIZATION, "Bearer expired")
                .header(header::COOKIE, "session-token=nurse-token"),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_text(res).await, "nurse");
    }

    #[tokio::test]
    async fn rejected_token_counts_as_absent() {
        let app = create_test_app(RouteGuard::default());
        let res = send(
            app,
            get_request("/dashboard").header(header::AUTHORIZATION, "Bearer garbage"),
        )
        .await;

        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&res), Some("/auth/signin"));
    }

    #[tokio::test]
    async fn root_without_token_is_sent_to_sign_in() {
        let app = create_test_app(RouteGuard::default());
        let res = send(app, get_request("/")).await;

        assert_eq!(location(&res), Some("/auth/signin"));
    }

    #[tokio::test]
    async fn dashboard_with_token_passes_identity_through() {
        let app = create_test_app(RouteGuard::default());
        let res = send(
            app,
            get_request("/dashboard/results").header(header::AUTHORIZATION, "Bearer tens-token"),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_text(res).await, "tens");
    }

    #[tokio::test]
    async fn public_page_passes_anonymously() {
        let app = create_test_app(RouteGuard::default());
        let res = send(app, get_request("/some-public-page")).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_text(res).await, "anonymous");
    }

    #[tokio::test]
    async fn excluded_paths_skip_token_handling() {
        for path in ["/api/anything", "/_next/static/x", "/_next/image/x", "/favicon.ico"] {
            let app = create_test_app(RouteGuard::default());
            let res = send(
                app,
                get_request(path).header(header::AUTHORIZATION, "Bearer admin-token"),
            )
            .await;

            assert_eq!(res.status(), StatusCode::OK, "{path}");
            assert_eq!(body_text(res).await, "anonymous", "{path}");
        }
    }

    #[tokio::test]
    async fn narrowed_exclusion_routes_api_through_guard() {
        let exclusion = ExclusionFilter::parse("/favicon.ico").unwrap();
        let app = create_test_app(RouteGuard::new(exclusion, RuleSet::default()));
        let res = send(
            app,
            get_request("/api/auth/session").header(header::AUTHORIZATION, "Bearer doctor-token"),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_text(res).await, "doctor");
    }
}
