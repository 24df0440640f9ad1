use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use super::ApiResponseBody;
use crate::inbound::http::SESSION_COOKIE;

/// Clears the session cookie.
///
/// There is no server-side revocation list: an already-issued token stays
/// valid until its expiry, logout only removes the client's copy.
pub async fn logout() -> impl IntoResponse {
    let cookie = format!("{}=; HttpOnly; Path=/; Max-Age=0", SESSION_COOKIE);

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(ApiResponseBody::new(
            StatusCode::OK,
            LogoutResponseData { logged_out: true },
        )),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutResponseData {
    pub logged_out: bool,
}
