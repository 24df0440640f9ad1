use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiResponseBody;
use crate::account::ports::AccountServicePort;
use crate::account::ports::UserDirectory;
use crate::inbound::http::router::AppState;
use crate::inbound::http::SESSION_COOKIE;

pub async fn login<D: UserDirectory>(
    State(state): State<AppState<D>>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let token = state
        .account_service
        .login(&body.email, &body.password)
        .await
        .map_err(ApiError::from)?;

    // The carrier value lands in an HttpOnly cookie so scripts cannot read
    // it; the token is also returned in the body for header-based clients.
    let cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/",
        SESSION_COOKIE,
        auth_core::carrier::to_carrier(&token)
    );

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(ApiResponseBody::new(
            StatusCode::OK,
            LoginResponseData { token },
        )),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
