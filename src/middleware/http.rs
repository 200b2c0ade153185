//! HTTP-level middleware (cross-cutting concerns).
//!
//! Outermost layer stack: request id, body limit, timeout, access log.
//! Guard redirects pass through it like any other response.

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::{StatusCode, header::HeaderName};
use tower::timeout::{TimeoutLayer, error::Elapsed};
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::HttpLimits;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Timeout → 408. Anything else a layer fails with → 500.
async fn layer_error_status(err: BoxError) -> StatusCode {
    if err.is::<Elapsed>() {
        return StatusCode::REQUEST_TIMEOUT;
    }
    tracing::error!(error = %err, "unhandled middleware error");
    StatusCode::INTERNAL_SERVER_ERROR
}

pub fn apply(router: Router, limits: &HttpLimits) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(layer_error_status))
            .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
            .layer(PropagateRequestIdLayer::new(request_id))
            .layer(RequestBodyLimitLayer::new(limits.body_limit_bytes))
            .layer(TimeoutLayer::new(limits.request_timeout))
            .layer(TraceLayer::new_for_http()),
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::{Body, Bytes},
        http::{Request, header},
        routing::{get, post},
    };
    use tower::ServiceExt;

    use super::*;

    async fn slow() -> StatusCode {
        tokio::time::sleep(Duration::from_secs(1)).await;
        StatusCode::OK
    }

    async fn accept(body: Bytes) -> String {
        body.len().to_string()
    }

    fn create_test_app() -> Router {
        let limits = HttpLimits {
            request_timeout: Duration::from_millis(50),
            body_limit_bytes: 16,
        };
        let router = Router::new()
            .route("/slow", get(slow))
            .route("/upload", post(accept));
        apply(router, &limits)
    }

    fn upload(len: usize) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/upload")
            .header(header::CONTENT_LENGTH, len)
            .body(Body::from(vec![b'x'; len]))
            .unwrap()
    }

    #[tokio::test]
    async fn slow_handler_times_out_with_408() {
        let req = Request::builder().uri("/slow").body(Body::empty()).unwrap();
        let res = create_test_app().oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn oversized_body_is_rejected_with_413() {
        let res = create_test_app().oneshot(upload(17)).await.unwrap();

        assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn body_within_limit_is_accepted() {
        let res = create_test_app().oneshot(upload(16)).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn request_id_is_generated_and_echoed() {
        let req = Request::builder()
            .method("POST")
            .uri("/upload")
            .body(Body::empty())
            .unwrap();
        let res = create_test_app().oneshot(req).await.unwrap();

        assert!(res.headers().contains_key(REQUEST_ID_HEADER));
    }
}
