//! Game catalog rows from the `jogos` table.

use gamefinder_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A catalog entry. Created implicitly the first time a review names an
/// unseen title; never updated or deleted through the API.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Game {
    pub id: DbId,
    pub titulo: String,
}
