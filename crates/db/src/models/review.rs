//! Review rows from the `avaliacoes` table.

use gamefinder_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// DTO for inserting a review. `tags` is already comma-joined.
#[derive(Debug)]
pub struct CreateReview {
    pub usuario_id: DbId,
    pub jogo_id: DbId,
    pub nota: i32,
    pub comentario: String,
    pub tags: String,
}

/// DTO for updating a review in place. Ownership is checked by the
/// repository, not carried here.
#[derive(Debug)]
pub struct UpdateReview {
    pub jogo_id: DbId,
    pub nota: i32,
    pub comentario: String,
    pub tags: String,
}

/// A review joined with its game title and author, as listed by
/// `GET /avaliacoes`. `comentario` and `tags` are COALESCEd to "" in the
/// query; `tags` is still in comma-joined storage form here.
#[derive(Debug, Clone, FromRow)]
pub struct ReviewListing {
    pub id: DbId,
    pub nota: i32,
    pub comentario: String,
    pub tags: String,
    pub data_criacao: Timestamp,
    pub nome_jogo: String,
    pub nome_usuario: String,
    pub usuario_id: DbId,
}

/// Outcome of an ownership-gated review mutation.
///
/// `Missing` and `NotOwner` both surface to clients as "not found"; they
/// are kept apart here so the server log can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewWriteOutcome {
    Applied,
    Missing,
    NotOwner,
}
