//! Route definitions for the merged user profile.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Profile routes.
///
/// ```text
/// GET /usuario/{id} -> fetch_profile
/// PUT /usuario/{id} -> upsert_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/usuario/{id}",
        get(profile::fetch_profile).put(profile::upsert_profile),
    )
}
