use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use super::handlers::ApiResponseBody;
use super::SESSION_COOKIE;
use crate::account::models::User;
use crate::account::ports::AccountServicePort;
use crate::account::ports::UserDirectory;
use crate::inbound::http::router::AppState;

/// Extension type carrying the resolved user through protected handlers.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Middleware gating protected routes on the credential carrier.
///
/// Pulls the carrier from the request, delegates to the session gate, and
/// stores the resolved user in the request extensions. Every failure
/// (missing carrier, malformed carrier, invalid or expired token, unknown
/// subject) produces the identical 401 response; the cause is logged but
/// never surfaced.
pub async fn session_gate<D: UserDirectory>(
    State(state): State<AppState<D>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let carrier = carrier_from_request(&req);

    let user = state
        .account_service
        .authenticate(carrier.as_deref())
        .await
        .map_err(|_| {
            tracing::warn!(path = %req.uri().path(), "Session gate rejected request");
            unauthenticated_response()
        })?;

    req.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(req).await)
}

/// Locate the raw carrier value: the session cookie first, the
/// Authorization header as fallback. Both hold `"Bearer <token>"`.
fn carrier_from_request(req: &Request) -> Option<String> {
    if let Some(cookies) = req
        .headers()
        .get(http::header::COOKIE)
        .and_then(|value| value.to_str().ok())
    {
        for pair in cookies.split(';') {
            if let Some(rest) = pair.trim_start().strip_prefix(SESSION_COOKIE) {
                if let Some(value) = rest.strip_prefix('=') {
                    return Some(value.to_string());
                }
            }
        }
    }

    req.headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// The single response every authentication failure collapses to.
fn unauthenticated_response() -> Response {
    let status = StatusCode::UNAUTHORIZED;
    (
        status,
        Json(ApiResponseBody::new_error(
            status,
            "Not authenticated".to_string(),
        )),
    )
        .into_response()
}
