//! Repository for the `perfis` table and the merged profile view.

use gamefinder_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{UpsertProfile, UserProfile};

/// Provides the merged profile fetch and the atomic profile upsert.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Fetch the merged account + profile record for an account id.
    ///
    /// Returns `None` when no account with that id exists. Profile columns
    /// come back NULL when the profile row is absent; a NULL or empty
    /// `nome` falls back to the account's `usuario` so the display name
    /// always has a value.
    pub async fn fetch_for_account(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let mut merged = sqlx::query_as::<_, UserProfile>(
            "SELECT
                c.id,
                c.email,
                c.usuario,
                p.nome,
                p.bio,
                p.avatar_url,
                p.banner_url,
                p.pronouns,
                p.links,
                p.preferences,
                p.favorites,
                p.activities,
                p.followers_count,
                p.status
             FROM cadastro c
             LEFT JOIN perfis p ON c.id = p.usuario_id
             WHERE c.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        if let Some(profile) = merged.as_mut() {
            if profile.nome.as_deref().map_or(true, str::is_empty) {
                profile.nome = Some(profile.usuario.clone());
            }
        }

        Ok(merged)
    }

    /// Insert or update the profile row for an account in one statement.
    ///
    /// Every writable column is overwritten with the provided value or
    /// NULL. `data_atualizacao` is stamped only by the update arm, so it
    /// is NULL exactly when the row has only ever been inserted -- which
    /// is how the RETURNING clause reports whether this call created the
    /// row.
    pub async fn upsert(
        pool: &PgPool,
        usuario_id: DbId,
        input: &UpsertProfile,
    ) -> Result<bool, sqlx::Error> {
        let (created,): (bool,) = sqlx::query_as(
            "INSERT INTO perfis
                (usuario_id, nome, email, bio, avatar_url, banner_url,
                 pronouns, links, preferences, favorites, activities)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             ON CONFLICT (usuario_id) DO UPDATE SET
                nome = EXCLUDED.nome,
                email = EXCLUDED.email,
                bio = EXCLUDED.bio,
                avatar_url = EXCLUDED.avatar_url,
                banner_url = EXCLUDED.banner_url,
                pronouns = EXCLUDED.pronouns,
                links = EXCLUDED.links,
                preferences = EXCLUDED.preferences,
                favorites = EXCLUDED.favorites,
                activities = EXCLUDED.activities,
                data_atualizacao = NOW()
             RETURNING (data_atualizacao IS NULL) AS created",
        )
        .bind(usuario_id)
        .bind(&input.nome)
        .bind(&input.email)
        .bind(&input.bio)
        .bind(&input.avatar_url)
        .bind(&input.banner_url)
        .bind(&input.pronouns)
        .bind(&input.links)
        .bind(&input.preferences)
        .bind(&input.favorites)
        .bind(&input.activities)
        .fetch_one(pool)
        .await?;

        Ok(created)
    }
}
