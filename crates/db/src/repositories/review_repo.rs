//! Repository for the `avaliacoes` table.

use gamefinder_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, ReviewListing, ReviewWriteOutcome, UpdateReview};

/// Provides review inserts, the joined listing, and ownership-gated
/// update/delete.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review, returning its generated id.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO avaliacoes (usuario_id, jogo_id, nota, comentario, tags)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(input.usuario_id)
        .bind(input.jogo_id)
        .bind(input.nota)
        .bind(&input.comentario)
        .bind(&input.tags)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// List every review joined with its game and author, newest first.
    ///
    /// The inner joins exclude reviews whose game or author row is gone.
    pub async fn list(pool: &PgPool) -> Result<Vec<ReviewListing>, sqlx::Error> {
        sqlx::query_as::<_, ReviewListing>(
            "SELECT
                a.id,
                a.nota,
                COALESCE(a.comentario, '') AS comentario,
                COALESCE(a.tags, '') AS tags,
                a.data_criacao,
                j.titulo AS nome_jogo,
                c.usuario AS nome_usuario,
                c.id AS usuario_id
             FROM avaliacoes a
             JOIN jogos j ON a.jogo_id = j.id
             JOIN cadastro c ON a.usuario_id = c.id
             ORDER BY a.data_criacao DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Update a review in place, gated on ownership.
    ///
    /// The ownership check is part of the UPDATE predicate: a row owned by
    /// someone else matches nothing, exactly like a missing row. A
    /// follow-up probe classifies which of the two happened.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        usuario_id: DbId,
        input: &UpdateReview,
    ) -> Result<ReviewWriteOutcome, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE avaliacoes
             SET jogo_id = $3,
                 nota = $4,
                 comentario = $5,
                 tags = $6,
                 data_atualizacao = NOW()
             WHERE id = $1 AND usuario_id = $2",
        )
        .bind(id)
        .bind(usuario_id)
        .bind(input.jogo_id)
        .bind(input.nota)
        .bind(&input.comentario)
        .bind(&input.tags)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(ReviewWriteOutcome::Applied);
        }
        Self::classify_miss(pool, id).await
    }

    /// Delete a review, gated on ownership like [`Self::update`].
    pub async fn delete(
        pool: &PgPool,
        id: DbId,
        usuario_id: DbId,
    ) -> Result<ReviewWriteOutcome, sqlx::Error> {
        let result = sqlx::query("DELETE FROM avaliacoes WHERE id = $1 AND usuario_id = $2")
            .bind(id)
            .bind(usuario_id)
            .execute(pool)
            .await?;

        if result.rows_affected() > 0 {
            return Ok(ReviewWriteOutcome::Applied);
        }
        Self::classify_miss(pool, id).await
    }

    /// Distinguish "review does not exist" from "review owned by someone
    /// else" after a zero-row mutation. The distinction is for logging;
    /// clients see the same answer either way.
    async fn classify_miss(pool: &PgPool, id: DbId) -> Result<ReviewWriteOutcome, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as("SELECT id FROM avaliacoes WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(match row {
            Some(_) => ReviewWriteOutcome::NotOwner,
            None => ReviewWriteOutcome::Missing,
        })
    }
}
