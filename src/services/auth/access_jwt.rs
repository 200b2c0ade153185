use std::fmt;

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::Identity;

// Errors returned by access-token verification + strict claim validation.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid ed25519 public key pem: {0}")]
    InvalidKey(#[source] jsonwebtoken::errors::Error),
    #[error("jwt verification failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("empty '{0}' claim")]
    EmptyClaim(&'static str),
}

/// Turns a raw token string into an [`Identity`].
///
/// The guard middleware only depends on this trait, so tests can swap in a
/// stub without key material.
pub trait TokenVerifier: Send + Sync + fmt::Debug {
    fn verify(&self, token: &str) -> Result<Identity, TokenError>;
}

/// Registered claims checked by `Validation` and dropped from `Identity::extra`.
const REGISTERED_CLAIMS: [&str; 6] = ["iss", "aud", "exp", "nbf", "iat", "jti"];

#[derive(Debug, Deserialize)]
struct AccessTokenClaims {
    sub: String,
    #[serde(default)]
    role: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// EdDSA (Ed25519) access-token verifier.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct AccessTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for AccessTokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AccessTokenVerifier {
    pub fn new(
        public_key_pem: &str,
        issuer: &str,
        audience: &str,
        leeway_seconds: u64,
    ) -> Result<Self, TokenError> {
        let decoding_key =
            DecodingKey::from_ed_pem(public_key_pem.as_bytes()).map_err(TokenError::InvalidKey)?;

        let mut validation = Validation::new(Algorithm::EdDSA);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.leeway = leeway_seconds;

        Ok(Self {
            decoding_key,
            validation,
        })
    }
}

impl TokenVerifier for AccessTokenVerifier {
    /// Signature, `exp`, `iss` and `aud` are checked by `jsonwebtoken`.
    /// `sub` and `role` must additionally be non-empty.
    fn verify(&self, token: &str) -> Result<Identity, TokenError> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;
        let mut claims = data.claims;

        if claims.sub.trim().is_empty() {
            return Err(TokenError::EmptyClaim("sub"));
        }
        if claims.role.trim().is_empty() {
            return Err(TokenError::EmptyClaim("role"));
        }

        for key in REGISTERED_CLAIMS {
            claims.extra.remove(key);
        }

        Ok(Identity {
            subject: claims.sub,
            role: claims.role,
            name: claims.name,
            email: claims.email,
            extra: claims.extra,
        })
    }
}
