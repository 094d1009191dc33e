use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use kanvas_services::session::SessionUser;

use crate::{error::ApiError, state::AppState};

pub const SESSION_COOKIE: &str = "access_token";

/// The signed-in user, from the `Authorization: Bearer` header or the
/// session cookie. Identifies who wrote an activity item and which
/// dashboard view applies; it does not gate access.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionUser);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Try Authorization header first
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(|s| s.to_string())
            // Then try cookie
            .or_else(|| {
                parts
                    .headers
                    .get(header::COOKIE)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|cookies| {
                        cookies.split(';').find_map(|cookie| {
                            cookie
                                .trim()
                                .strip_prefix(SESSION_COOKIE)
                                .and_then(|rest| rest.strip_prefix('='))
                                .filter(|value| !value.is_empty())
                                .map(|s| s.to_string())
                        })
                    })
            })
            .ok_or_else(|| ApiError::Unauthorized("No session token provided".to_string()))?;

        let user = state.sessions.verify(&token)?;
        Ok(CurrentUser(user))
    }
}
