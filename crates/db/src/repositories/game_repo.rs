//! Repository for the `jogos` catalog table.

use gamefinder_core::types::DbId;
use sqlx::PgPool;

use crate::models::game::Game;

/// Provides catalog listing and find-or-create title registration.
pub struct GameRepo;

impl GameRepo {
    /// List the whole catalog in random order, re-shuffled on every call.
    pub async fn list_random(pool: &PgPool) -> Result<Vec<Game>, sqlx::Error> {
        sqlx::query_as::<_, Game>("SELECT id, titulo FROM jogos ORDER BY RANDOM()")
            .fetch_all(pool)
            .await
    }

    /// Resolve a title to its game id, inserting the row when absent.
    ///
    /// Titles match exactly (no case folding or trimming). Concurrent
    /// first submissions of the same title are resolved by the unique
    /// index on `titulo`: the losing insert falls through to the final
    /// lookup and reuses the winner's row.
    pub async fn find_or_create(pool: &PgPool, titulo: &str) -> Result<DbId, sqlx::Error> {
        let existing: Option<(DbId,)> = sqlx::query_as("SELECT id FROM jogos WHERE titulo = $1")
            .bind(titulo)
            .fetch_optional(pool)
            .await?;
        if let Some((id,)) = existing {
            return Ok(id);
        }

        let inserted: Option<(DbId,)> = sqlx::query_as(
            "INSERT INTO jogos (titulo) VALUES ($1)
             ON CONFLICT (titulo) DO NOTHING
             RETURNING id",
        )
        .bind(titulo)
        .fetch_optional(pool)
        .await?;
        if let Some((id,)) = inserted {
            return Ok(id);
        }

        // Lost the insert race; the row exists now.
        let (id,): (DbId,) = sqlx::query_as("SELECT id FROM jogos WHERE titulo = $1")
            .bind(titulo)
            .fetch_one(pool)
            .await?;
        Ok(id)
    }
}
