// SPDX-License-Identifier: MIT

//! Session JWT authentication middleware.
//!
//! The hosted backend issues HS256 session tokens (anonymous or signed-in).
//! We verify them against the shared signing secret and keep the raw token
//! so data API calls can forward it, letting row-level security apply to
//! every read and write made on the user's behalf.

use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (backend user id)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Session role ("anon" or "authenticated")
    #[serde(default)]
    pub role: String,
}

/// Authenticated user extracted from the session JWT.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
    /// Raw token, forwarded to the data API for row-level security.
    pub token: String,
}

/// Middleware that requires a valid session JWT.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let user = user_from_headers(request.headers(), &state.config.jwt_secret)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Extract and verify a session user from request headers, if present.
///
/// Used directly by endpoints that degrade to a read-only view for callers
/// without a session.
pub fn user_from_headers(headers: &HeaderMap, jwt_secret: &[u8]) -> Option<AuthUser> {
    let auth_header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = auth_header.strip_prefix("Bearer ")?;

    let key = DecodingKey::from_secret(jwt_secret);
    let mut validation = Validation::new(Algorithm::HS256);
    // Backend session tokens carry an audience claim we don't check
    validation.validate_aud = false;

    let token_data = decode::<Claims>(token, &key, &validation).ok()?;

    Some(AuthUser {
        user_id: token_data.claims.sub,
        token: token.to_string(),
    })
}
