//! Profile rows from the `perfis` table and the merged account+profile
//! view.

use gamefinder_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Writable profile fields, as sent by `PUT /usuario/{id}`.
///
/// `links`, `preferences`, `favorites` and `activities` carry serialized
/// JSON owned by the client; the server stores and returns them verbatim.
/// Omitted fields overwrite their column with NULL -- the client always
/// sends the full document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertProfile {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub pronouns: Option<String>,
    pub links: Option<String>,
    pub preferences: Option<String>,
    pub favorites: Option<String>,
    pub activities: Option<String>,
}

/// Merged account + profile record returned by `GET /usuario/{id}`.
///
/// Profile columns are NULL when the account has no profile row yet.
/// `followers_count` and `status` are read-only through the API.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub email: String,
    pub usuario: String,
    pub nome: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub pronouns: Option<String>,
    pub links: Option<String>,
    pub preferences: Option<String>,
    pub favorites: Option<String>,
    pub activities: Option<String>,
    pub followers_count: Option<i32>,
    pub status: Option<String>,
}
