/// Factory: build the token verifier from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{AccessTokenVerifier, TokenError, TokenVerifier};

pub fn build_token_verifier(config: &Config) -> Result<Arc<dyn TokenVerifier>, TokenError> {
    let verifier = AccessTokenVerifier::new(
        &config.access_jwt_public_key_pem,
        &config.auth_issuer,
        &config.auth_audience,
        config.access_token_leeway_seconds,
    )?;

    Ok(Arc::new(verifier))
}
