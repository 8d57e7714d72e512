//! Route definitions for the game catalog and reviews.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Catalog and review routes.
///
/// ```text
/// GET    /jogos            -> list_games
/// POST   /salvar-avaliacao -> save_review
/// GET    /avaliacoes       -> list_reviews
/// PUT    /avaliacoes/{id}  -> update_review
/// DELETE /avaliacoes/{id}  -> delete_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/jogos", get(reviews::list_games))
        .route("/salvar-avaliacao", post(reviews::save_review))
        .route("/avaliacoes", get(reviews::list_reviews))
        .route(
            "/avaliacoes/{id}",
            put(reviews::update_review).delete(reviews::delete_review),
        )
}
