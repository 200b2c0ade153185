//! CORS for browser clients. Credentials are never allowed.
//!
//! - development: any origin
//! - production: exact match against `CORS_ALLOWED_ORIGINS`; an empty list
//!   allows no origin

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::Config;
use crate::middleware::http::REQUEST_ID_HEADER;

/// The guarded pages are read-only.
const METHODS: [Method; 3] = [Method::GET, Method::HEAD, Method::OPTIONS];

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(10 * 60);

fn allow_origin(config: &Config) -> AllowOrigin {
    if !config.app_env.is_production() {
        return AllowOrigin::any();
    }

    let allowlist: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    AllowOrigin::predicate(move |origin: &HeaderValue, _parts| allowlist.contains(origin))
}

pub fn apply(router: Router, config: &Config) -> Router {
    let layer = CorsLayer::new()
        .allow_origin(allow_origin(config))
        .allow_methods(METHODS)
        .allow_headers([
            header::AUTHORIZATION,
            header::ACCEPT,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .max_age(PREFLIGHT_MAX_AGE);

    router.layer(layer)
}
