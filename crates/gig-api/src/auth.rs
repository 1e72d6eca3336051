//! Cookie-based session authentication.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Email identity the credential is bound to.
    pub sub: String,
    /// Issued at (seconds since epoch).
    pub iat: i64,
    /// Expiration (seconds since epoch).
    pub exp: i64,
}

/// Issues and verifies signed session tokens.
pub struct SessionService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_days: i64,
}

impl SessionService {
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_days,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.jwt_secret, config.token_ttl_days)
    }

    /// Produce a signed token binding the email identity, valid for the
    /// configured lifetime. Pure computation; the caller owns transport.
    pub fn issue(&self, email: &str) -> Result<String, ApiError> {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub: email.to_string(),
            iat: now,
            exp: now + self.ttl_days * 24 * 60 * 60,
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| ApiError::internal(format!("token signing failed: {e}")))
    }

    /// Validate signature and expiry. Never mutates state.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, ApiError> {
        decode::<SessionClaims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| ApiError::unauthorized(format!("Invalid token: {e}")))
    }
}

/// Build the session cookie for an issued token.
pub fn session_cookie(token: String, config: &ApiConfig) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(config.is_production());
    // Cross-site clients need None, which browsers only accept with Secure;
    // development falls back to Lax over plain HTTP.
    cookie.set_same_site(if config.is_production() {
        SameSite::None
    } else {
        SameSite::Lax
    });
    cookie.set_max_age(time::Duration::days(config.token_ttl_days));
    cookie
}

/// Build the expired cookie that clears a session.
pub fn expired_session_cookie(config: &ApiConfig) -> Cookie<'static> {
    let mut cookie = session_cookie(String::new(), config);
    cookie.set_max_age(time::Duration::ZERO);
    cookie
}

/// Authenticated identity extracted from the session cookie.
///
/// Handlers receive this as a parameter, so verification always completes
/// before the handler body runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
}

impl AuthUser {
    /// Enforce the path-matches-token rule for identity-scoped routes: a
    /// valid token for someone else's email is still unauthorized.
    pub fn authorize_path_email(&self, email: &str) -> Result<(), ApiError> {
        if self.email == email {
            Ok(())
        } else {
            Err(ApiError::unauthorized("Forbidden access"))
        }
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or_else(|| ApiError::unauthorized("Missing session cookie"))?;

        let claims = state.session.verify(&token)?;
        Ok(Self { email: claims.sub })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_verify_round_trip() {
        let service = SessionService::new("test-secret", 365);
        let token = service.issue("alice@x.com").unwrap();
        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, "alice@x.com");
        assert_eq!(claims.exp - claims.iat, 365 * 24 * 60 * 60);
    }

    #[test]
    fn rejects_wrong_signature() {
        let issuer = SessionService::new("secret-a", 365);
        let verifier = SessionService::new("secret-b", 365);
        let token = issuer.issue("alice@x.com").unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn rejects_expired_tokens() {
        let service = SessionService::new("test-secret", -2);
        let token = service.issue("alice@x.com").unwrap();
        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn rejects_garbage_tokens() {
        let service = SessionService::new("test-secret", 365);
        assert!(service.verify("not-a-token").is_err());
        assert!(service.verify("").is_err());
    }

    #[test]
    fn cookie_attributes_follow_environment() {
        let dev = ApiConfig::default();
        let cookie = session_cookie("tok".to_string(), &dev);
        assert!(cookie.http_only().unwrap_or(false));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));

        let prod = ApiConfig {
            environment: "production".to_string(),
            ..ApiConfig::default()
        };
        let cookie = session_cookie("tok".to_string(), &prod);
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
    }

    #[test]
    fn clearing_cookie_expires_immediately() {
        let cookie = expired_session_cookie(&ApiConfig::default());
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
        assert_eq!(cookie.value(), "");
    }
}
