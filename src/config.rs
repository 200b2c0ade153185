/*
 * Responsibility
 * - 環境変数や設定の読み込み (CORS 許可、Auth 設定、ガードの除外パスなど)
 * - 設定値のバリデーション (不足・不正なら起動失敗)
 */
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

use crate::services::guard::{ExclusionFilter, exclusion::DEFAULT_EXCLUDED_PATHS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<&str>) -> Self {
        match value
            .unwrap_or("development")
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Limits applied by `middleware::http`.
#[derive(Debug, Clone, Copy)]
pub struct HttpLimits {
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
}

impl Default for HttpLimits {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            body_limit_bytes: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub auth_issuer: String,
    pub auth_audience: String,
    pub access_token_leeway_seconds: u64,
    pub access_jwt_public_key_pem: String,

    pub session_cookie_name: String,
    pub guard_exclusion: ExclusionFilter,

    pub http: HttpLimits,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let auth_issuer = lookup("AUTH_ISSUER").ok_or(ConfigError::Missing("AUTH_ISSUER"))?;
        let auth_audience = lookup("AUTH_AUDIENCE").ok_or(ConfigError::Missing("AUTH_AUDIENCE"))?;

        let access_token_leeway_seconds = parse_or(
            &lookup,
            "ACCESS_TOKEN_LEEWAY_SECONDS",
            60,
        )?;

        let access_jwt_public_key_pem = lookup("ACCESS_JWT_PUBLIC_KEY_PEM")
            .ok_or(ConfigError::Missing("ACCESS_JWT_PUBLIC_KEY_PEM"))?
            .replace("\\n", "\n");

        let session_cookie_name = lookup("SESSION_COOKIE_NAME")
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| "session-token".to_string());
        if session_cookie_name.is_empty() {
            return Err(ConfigError::Invalid("SESSION_COOKIE_NAME"));
        }

        let guard_exclusion = ExclusionFilter::parse(
            lookup("GUARD_EXCLUDED_PATHS")
                .as_deref()
                .unwrap_or(DEFAULT_EXCLUDED_PATHS),
        )
        .map_err(|_| ConfigError::Invalid("GUARD_EXCLUDED_PATHS"))?;

        let defaults = HttpLimits::default();
        let http = HttpLimits {
            request_timeout: Duration::from_secs(non_zero_or(
                &lookup,
                "REQUEST_TIMEOUT_SECONDS",
                defaults.request_timeout.as_secs(),
            )?),
            body_limit_bytes: non_zero_or(
                &lookup,
                "REQUEST_BODY_LIMIT_BYTES",
                defaults.body_limit_bytes,
            )?,
        };

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            auth_issuer,
            auth_audience,
            access_token_leeway_seconds,
            access_jwt_public_key_pem,
            session_cookie_name,
            guard_exclusion,
            http,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

/// Zero would time out every request (or reject every body).
fn non_zero_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Default + PartialEq,
{
    let value = parse_or(lookup, key, default)?;
    if value == T::default() {
        return Err(ConfigError::Invalid(key));
    }
    Ok(value)
}
