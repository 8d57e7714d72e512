//! Repository for the `cadastro` table.

use gamefinder_core::types::DbId;
use sqlx::PgPool;

use crate::models::account::{Account, CreateAccount};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, usuario, email, senha";

/// Provides account lookups and registration inserts.
pub struct AccountRepo;

impl AccountRepo {
    /// Insert a new account, returning the created row.
    ///
    /// The unique index on `email` backstops concurrent registrations of
    /// the same address.
    pub async fn create(pool: &PgPool, input: &CreateAccount) -> Result<Account, sqlx::Error> {
        let query = format!(
            "INSERT INTO cadastro (usuario, email, senha)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(&input.usuario)
            .bind(&input.email)
            .bind(&input.senha)
            .fetch_one(pool)
            .await
    }

    /// Whether an account with the given email exists (case-sensitive).
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as("SELECT id FROM cadastro WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    /// Match an account by email and password digest in a single lookup.
    ///
    /// Unknown email and wrong digest both return `None`, so callers
    /// cannot tell the two cases apart.
    pub async fn find_by_credentials(
        pool: &PgPool,
        email: &str,
        senha_digest: &str,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cadastro WHERE email = $1 AND senha = $2");
        sqlx::query_as::<_, Account>(&query)
            .bind(email)
            .bind(senha_digest)
            .fetch_optional(pool)
            .await
    }
}
