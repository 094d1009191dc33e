use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
};
use kanvas_services::session::{IssuedSession, SessionUser, SignInProvider};
use serde::Deserialize;

use crate::{
    error::ApiError,
    extractors::session::{CurrentUser, SESSION_COOKIE},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub provider: SignInProvider,
    pub email: Option<String>,
}

pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<SignInRequest>,
) -> Result<(HeaderMap, Json<IssuedSession>), ApiError> {
    let issued = state.sessions.sign_in(body.provider, body.email.as_deref())?;

    let cookie = format!(
        "{}={}; HttpOnly; Path=/; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE, issued.access_token, issued.expires_in
    );
    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, cookie_header(&cookie)?);

    Ok((headers, Json(issued)))
}

pub async fn sign_out() -> Result<(StatusCode, HeaderMap), ApiError> {
    let cookie = format!("{}=; HttpOnly; Path=/; SameSite=Lax; Max-Age=0", SESSION_COOKIE);
    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, cookie_header(&cookie)?);

    Ok((StatusCode::NO_CONTENT, headers))
}

pub async fn me(CurrentUser(user): CurrentUser) -> Json<SessionUser> {
    Json(user)
}

fn cookie_header(cookie: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(cookie).map_err(|e| ApiError::Internal(e.to_string()))
}
