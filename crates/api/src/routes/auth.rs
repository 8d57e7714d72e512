//! Route definitions for account registration and login.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Account routes.
///
/// ```text
/// POST /check-email -> check_email
/// POST /register    -> register
/// POST /login       -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/check-email", post(auth::check_email))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}
