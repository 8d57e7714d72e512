//! Handlers for the merged user profile resource.

use axum::extract::{Path, State};
use axum::Json;
use gamefinder_core::error::CoreError;
use gamefinder_core::types::DbId;
use gamefinder_db::models::profile::{UpsertProfile, UserProfile};
use gamefinder_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /usuario/{id}
///
/// Return the account joined with its profile. The profile row may not
/// exist yet; its columns come back null in that case, except `nome`,
/// which falls back to the account's `usuario`.
pub async fn fetch_profile(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserProfile>> {
    let profile = ProfileRepo::fetch_for_account(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("Usuário não encontrado".into())))?;

    Ok(Json(profile))
}

/// PUT /usuario/{id}
///
/// Create or update the profile row for an account in one atomic write.
/// Every writable column is overwritten with the provided value or NULL;
/// the client always sends the full document.
pub async fn upsert_profile(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpsertProfile>,
) -> AppResult<Json<MessageResponse>> {
    let created = ProfileRepo::upsert(&state.pool, id, &input).await?;

    tracing::info!(usuario_id = id, created, "Profile saved");

    let message = if created {
        "Perfil criado com sucesso!"
    } else {
        "Perfil atualizado com sucesso!"
    };
    Ok(Json(MessageResponse::new(message)))
}
