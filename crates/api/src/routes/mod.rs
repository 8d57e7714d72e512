pub mod auth;
pub mod health;
pub mod profile;
pub mod reviews;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy (all paths at the server root):
///
/// ```text
/// POST   /check-email          email presence check
/// POST   /register             account registration
/// POST   /login                credential login
///
/// GET    /usuario/{id}         merged account + profile
/// PUT    /usuario/{id}         profile upsert
///
/// GET    /jogos                game catalog (random order)
/// POST   /salvar-avaliacao     submit review
/// GET    /avaliacoes           list reviews (newest first)
/// PUT    /avaliacoes/{id}      update own review
/// DELETE /avaliacoes/{id}      delete own review
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Account registration and login.
        .merge(auth::router())
        // Merged user profile.
        .merge(profile::router())
        // Game catalog and reviews.
        .merge(reviews::router())
}
