//! Handlers for the game catalog and review resources.

use axum::extract::{Path, State};
use axum::Json;
use gamefinder_core::error::CoreError;
use gamefinder_core::tags::{split_tags, TagsField};
use gamefinder_core::types::{DbId, Timestamp};
use gamefinder_db::models::game::Game;
use gamefinder_db::models::review::{CreateReview, ReviewWriteOutcome, UpdateReview};
use gamefinder_db::repositories::{GameRepo, ReviewRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::required;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body shared by `POST /salvar-avaliacao` and
/// `PUT /avaliacoes/{id}`.
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub usuario_id: Option<DbId>,
    pub jogo_nome: Option<String>,
    pub nota: Option<i32>,
    pub comentario: Option<String>,
    pub tags: Option<TagsField>,
}

/// Request body for `DELETE /avaliacoes/{id}`.
#[derive(Debug, Deserialize)]
pub struct DeleteReviewRequest {
    pub usuario_id: Option<DbId>,
}

/// Response body for `POST /salvar-avaliacao`.
#[derive(Debug, Serialize)]
pub struct SavedReviewResponse {
    pub id: DbId,
}

/// Response body for review update/delete.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// One entry of `GET /avaliacoes`: a review with its game title and
/// author, tags decoded back into a list.
#[derive(Debug, Serialize)]
pub struct ReviewEntry {
    pub id: DbId,
    pub nota: i32,
    pub comentario: String,
    pub tags: Vec<String>,
    pub data_criacao: Timestamp,
    pub nome_jogo: String,
    pub nome_usuario: String,
    pub usuario_id: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /jogos
///
/// The whole catalog, re-shuffled on every call.
pub async fn list_games(State(state): State<AppState>) -> AppResult<Json<Vec<Game>>> {
    let games = GameRepo::list_random(&state.pool).await?;
    Ok(Json(games))
}

/// POST /salvar-avaliacao
///
/// Validate, resolve the game (creating it on first mention), insert the
/// review, and return the generated id.
pub async fn save_review(
    State(state): State<AppState>,
    Json(input): Json<ReviewRequest>,
) -> AppResult<Json<SavedReviewResponse>> {
    let (usuario_id, jogo_nome, nota) = validate_review_fields(&input)?;
    let (comentario, tags) = normalize_optional_fields(&input);

    let jogo_id = GameRepo::find_or_create(&state.pool, jogo_nome).await?;

    let id = ReviewRepo::create(
        &state.pool,
        &CreateReview {
            usuario_id,
            jogo_id,
            nota,
            comentario,
            tags,
        },
    )
    .await?;

    tracing::info!(review_id = id, usuario_id, jogo_id, "Review saved");

    Ok(Json(SavedReviewResponse { id }))
}

/// GET /avaliacoes
///
/// Every review joined with its game and author, newest first, tags
/// decoded into a list.
pub async fn list_reviews(State(state): State<AppState>) -> AppResult<Json<Vec<ReviewEntry>>> {
    let rows = ReviewRepo::list(&state.pool).await?;

    let entries = rows
        .into_iter()
        .map(|row| ReviewEntry {
            id: row.id,
            nota: row.nota,
            comentario: row.comentario,
            tags: split_tags(&row.tags),
            data_criacao: row.data_criacao,
            nome_jogo: row.nome_jogo,
            nome_usuario: row.nome_usuario,
            usuario_id: row.usuario_id,
        })
        .collect();

    Ok(Json(entries))
}

/// PUT /avaliacoes/{id}
///
/// Update a review in place. The row must be owned by the caller; a
/// missing row and a foreign owner both answer 404.
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReviewRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let (usuario_id, jogo_nome, nota) = validate_review_fields(&input)?;
    let (comentario, tags) = normalize_optional_fields(&input);

    let jogo_id = GameRepo::find_or_create(&state.pool, jogo_nome).await?;

    let outcome = ReviewRepo::update(
        &state.pool,
        id,
        usuario_id,
        &UpdateReview {
            jogo_id,
            nota,
            comentario,
            tags,
        },
    )
    .await?;

    finish_gated_write(outcome, id, usuario_id, "update")?;
    Ok(Json(SuccessResponse { success: true }))
}

/// DELETE /avaliacoes/{id}
///
/// Delete a review, with the same ownership policy as update.
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<DeleteReviewRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let usuario_id = input.usuario_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("ID do usuário é obrigatório".into()))
    })?;

    let outcome = ReviewRepo::delete(&state.pool, id, usuario_id).await?;

    finish_gated_write(outcome, id, usuario_id, "delete")?;
    Ok(Json(SuccessResponse { success: true }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate the required review fields (`usuario_id`, `jogo_nome`,
/// `nota`).
fn validate_review_fields(input: &ReviewRequest) -> Result<(DbId, &str, i32), AppError> {
    let usuario_id = input.usuario_id.ok_or_else(incomplete)?;
    let jogo_nome = required(&input.jogo_nome, "Dados incompletos")?;
    let nota = input.nota.ok_or_else(incomplete)?;
    Ok((usuario_id, jogo_nome, nota))
}

fn incomplete() -> AppError {
    AppError::Core(CoreError::Validation("Dados incompletos".into()))
}

/// Normalize the optional review fields: `comentario` defaults to "" and
/// `tags` (list or scalar on the wire) to its comma-joined storage form.
fn normalize_optional_fields(input: &ReviewRequest) -> (String, String) {
    let comentario = input.comentario.clone().unwrap_or_default();
    let tags = input.tags.as_ref().map(TagsField::join).unwrap_or_default();
    (comentario, tags)
}

/// Map a gated write outcome to the HTTP result, logging why a zero-row
/// mutation missed. Clients get the same 404 for both miss reasons.
fn finish_gated_write(
    outcome: ReviewWriteOutcome,
    id: DbId,
    usuario_id: DbId,
    action: &'static str,
) -> Result<(), AppError> {
    match outcome {
        ReviewWriteOutcome::Applied => Ok(()),
        ReviewWriteOutcome::Missing => {
            tracing::debug!(review_id = id, usuario_id, action, "Review not found");
            Err(review_not_found())
        }
        ReviewWriteOutcome::NotOwner => {
            tracing::warn!(
                review_id = id,
                usuario_id,
                action,
                "Review owned by another user"
            );
            Err(review_not_found())
        }
    }
}

fn review_not_found() -> AppError {
    AppError::Core(CoreError::NotFound(
        "Avaliação não encontrada ou usuário não autorizado".into(),
    ))
}
