use axum::http::StatusCode;
use axum::Extension;

use super::ApiSuccess;
use super::UserData;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Returns the user resolved by the session gate.
pub async fn me(Extension(auth): Extension<AuthenticatedUser>) -> ApiSuccess<UserData> {
    ApiSuccess::new(StatusCode::OK, UserData::from(&auth.user))
}
