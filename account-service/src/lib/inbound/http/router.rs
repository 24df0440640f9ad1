use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::me::me;
use super::handlers::register::register;
use super::middleware::session_gate;
use crate::account::ports::UserDirectory;
use crate::account::service::AccountService;

pub struct AppState<D: UserDirectory> {
    pub account_service: Arc<AccountService<D>>,
}

impl<D: UserDirectory> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            account_service: Arc::clone(&self.account_service),
        }
    }
}

pub fn create_router<D: UserDirectory>(account_service: Arc<AccountService<D>>) -> Router {
    let state = AppState { account_service };

    let public_routes = Router::new()
        .route("/api/auth/register", post(register::<D>))
        .route("/api/auth/login", post(login::<D>))
        .route("/api/auth/logout", post(logout));

    let protected_routes = Router::new()
        .route("/api/users/me", get(me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_gate::<D>,
        ));

    // Headers are not traced: the cookie and Authorization values hold
    // bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
