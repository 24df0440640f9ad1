pub mod handlers;
pub mod middleware;
pub mod router;

/// Cookie that carries the serialized credential between client and server.
/// Its value follows the `"Bearer <token>"` carrier convention.
pub const SESSION_COOKIE: &str = "access_token";
