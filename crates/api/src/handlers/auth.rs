//! Handlers for account registration and login.

use axum::extract::State;
use axum::Json;
use gamefinder_core::error::CoreError;
use gamefinder_core::hashing::password_digest;
use gamefinder_db::models::account::{AccountInfo, CreateAccount};
use gamefinder_db::repositories::AccountRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::required;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /check-email`.
#[derive(Debug, Deserialize)]
pub struct CheckEmailRequest {
    pub email: Option<String>,
}

/// Response body for `POST /check-email`.
#[derive(Debug, Serialize)]
pub struct CheckEmailResponse {
    pub exists: bool,
}

/// Request body for `POST /register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub usuario: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub senha: Option<String>,
}

/// Response body for `POST /login`. `user` never carries the password
/// digest.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: AccountInfo,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /check-email
///
/// Report whether an email is already registered. Read-only, no side
/// effects.
pub async fn check_email(
    State(state): State<AppState>,
    Json(input): Json<CheckEmailRequest>,
) -> AppResult<Json<CheckEmailResponse>> {
    let email = required(&input.email, "Email é obrigatório")?;

    let exists = AccountRepo::email_exists(&state.pool, email).await?;

    Ok(Json(CheckEmailResponse { exists }))
}

/// POST /register
///
/// Create a new account. The email must not be registered yet; the unique
/// index on `cadastro.email` backstops concurrent registrations of the
/// same address.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<Json<MessageResponse>> {
    let usuario = required(&input.usuario, "Preencha todos os campos!")?;
    let email = required(&input.email, "Preencha todos os campos!")?;
    let senha = required(&input.senha, "Preencha todos os campos!")?;

    if AccountRepo::email_exists(&state.pool, email).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Email já cadastrado!".into(),
        )));
    }

    let account = AccountRepo::create(
        &state.pool,
        &CreateAccount {
            usuario: usuario.to_string(),
            email: email.to_string(),
            senha: password_digest(senha),
        },
    )
    .await?;

    tracing::info!(account_id = account.id, "Account registered");

    Ok(Json(MessageResponse::new("Usuário registrado com sucesso!")))
}

/// POST /login
///
/// Match email + password digest in a single lookup. Unknown email and
/// wrong password produce the same 401 so accounts cannot be enumerated.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let email = required(&input.email, "Email e senha são obrigatórios")?;
    let senha = required(&input.senha, "Email e senha são obrigatórios")?;

    let account = AccountRepo::find_by_credentials(&state.pool, email, &password_digest(senha))
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Email ou senha inválidos!".into()))
        })?;

    tracing::info!(account_id = account.id, "Login succeeded");

    Ok(Json(LoginResponse {
        message: "Login realizado com sucesso!".to_string(),
        user: account.into(),
    }))
}
