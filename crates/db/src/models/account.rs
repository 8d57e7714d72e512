//! Account rows from the `cadastro` table.

use gamefinder_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Full account row.
///
/// Contains the password digest -- NEVER serialize this to API responses.
/// Use [`AccountInfo`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub usuario: String,
    pub email: String,
    pub senha: String,
}

/// Safe account representation for API responses (no password digest).
#[derive(Debug, Clone, Serialize)]
pub struct AccountInfo {
    pub id: DbId,
    pub usuario: String,
    pub email: String,
}

impl From<Account> for AccountInfo {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            usuario: account.usuario,
            email: account.email,
        }
    }
}

/// DTO for registering a new account. `senha` is already digested.
#[derive(Debug)]
pub struct CreateAccount {
    pub usuario: String,
    pub email: String,
    pub senha: String,
}
