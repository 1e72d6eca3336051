//! Session handlers: token issuance and logout.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::{expired_session_cookie, session_cookie};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Token issuance request.
#[derive(Debug, Deserialize, Validate)]
pub struct TokenRequest {
    /// Identity the credential is bound to.
    #[validate(email)]
    pub email: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub success: bool,
}

/// Issue a session cookie for the supplied identity.
pub async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<TokenRequest>,
) -> ApiResult<(CookieJar, Json<TokenResponse>)> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let token = state.session.issue(&req.email)?;
    let jar = jar.add(session_cookie(token, &state.config));

    Ok((jar, Json(TokenResponse { success: true })))
}

/// Clear the session cookie.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<TokenResponse>) {
    let jar = jar.add(expired_session_cookie(&state.config));
    (jar, Json(TokenResponse { success: true }))
}
