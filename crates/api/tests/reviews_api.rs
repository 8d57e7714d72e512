//! HTTP-level integration tests for the game catalog and review
//! endpoints.

mod common;

use axum::http::StatusCode;
use common::{build_test_app, get, send_json};
use gamefinder_core::hashing::password_digest;
use gamefinder_db::models::account::CreateAccount;
use gamefinder_db::repositories::AccountRepo;
use serde_json::json;
use sqlx::PgPool;

/// Create a test account directly in the database and return its id.
async fn seed_account(pool: &PgPool, usuario: &str, email: &str) -> i64 {
    let input = CreateAccount {
        usuario: usuario.to_string(),
        email: email.to_string(),
        senha: password_digest("segredo123"),
    };
    AccountRepo::create(pool, &input)
        .await
        .expect("account creation should succeed")
        .id
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_and_list_review(pool: PgPool) {
    let usuario_id = seed_account(&pool, "ana", "ana@test.com").await;
    let app = build_test_app(pool);

    let (status, body) = send_json(
        &app,
        "POST",
        "/salvar-avaliacao",
        json!({
            "usuario_id": usuario_id,
            "jogo_nome": "Halo",
            "nota": 9,
            "tags": ["FPS", "Aventura"],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].is_i64());

    let (status, body) = get(&app, "/avaliacoes").await;
    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().expect("listing should be an array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["nome_jogo"], "Halo");
    assert_eq!(entries[0]["nome_usuario"], "ana");
    assert_eq!(entries[0]["nota"], 9);
    assert_eq!(entries[0]["tags"], json!(["FPS", "Aventura"]));
    assert_eq!(entries[0]["comentario"], "");

    // The submission also registered the game.
    let (status, body) = get(&app, "/jogos").await;
    assert_eq!(status, StatusCode::OK);
    let games = body.as_array().unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0]["titulo"], "Halo");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submit_rejects_missing_fields(pool: PgPool) {
    let usuario_id = seed_account(&pool, "ana", "ana@test.com").await;
    let app = build_test_app(pool);

    let (status, body) = send_json(
        &app,
        "POST",
        "/salvar-avaliacao",
        json!({"usuario_id": usuario_id, "jogo_nome": "Halo"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Dados incompletos");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn scalar_tags_are_accepted(pool: PgPool) {
    let usuario_id = seed_account(&pool, "ana", "ana@test.com").await;
    let app = build_test_app(pool);

    let (status, _) = send_json(
        &app,
        "POST",
        "/salvar-avaliacao",
        json!({"usuario_id": usuario_id, "jogo_nome": "Hades", "nota": 10, "tags": "Roguelike"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/avaliacoes").await;
    assert_eq!(body[0]["tags"], json!(["Roguelike"]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn omitted_tags_and_comment_default_to_empty(pool: PgPool) {
    let usuario_id = seed_account(&pool, "ana", "ana@test.com").await;
    let app = build_test_app(pool);

    send_json(
        &app,
        "POST",
        "/salvar-avaliacao",
        json!({"usuario_id": usuario_id, "jogo_nome": "Hades", "nota": 10}),
    )
    .await;

    let (_, body) = get(&app, "/avaliacoes").await;
    assert_eq!(body[0]["tags"], json!([]));
    assert_eq!(body[0]["comentario"], "");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn repeat_submissions_reuse_the_game(pool: PgPool) {
    let usuario_id = seed_account(&pool, "ana", "ana@test.com").await;
    let app = build_test_app(pool);

    for nota in [7, 9] {
        send_json(
            &app,
            "POST",
            "/salvar-avaliacao",
            json!({"usuario_id": usuario_id, "jogo_nome": "Halo", "nota": nota}),
        )
        .await;
    }

    let (_, body) = get(&app, "/jogos").await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = get(&app, "/avaliacoes").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn owner_updates_own_review(pool: PgPool) {
    let usuario_id = seed_account(&pool, "ana", "ana@test.com").await;
    let app = build_test_app(pool);

    let (_, body) = send_json(
        &app,
        "POST",
        "/salvar-avaliacao",
        json!({"usuario_id": usuario_id, "jogo_nome": "Halo", "nota": 7}),
    )
    .await;
    let id = body["id"].as_i64().unwrap();

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/avaliacoes/{id}"),
        json!({
            "usuario_id": usuario_id,
            "jogo_nome": "Halo",
            "nota": 9,
            "comentario": "melhor no replay",
            "tags": ["FPS"],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = get(&app, "/avaliacoes").await;
    assert_eq!(body[0]["nota"], 9);
    assert_eq!(body[0]["comentario"], "melhor no replay");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_with_new_title_registers_the_game(pool: PgPool) {
    let usuario_id = seed_account(&pool, "ana", "ana@test.com").await;
    let app = build_test_app(pool);

    let (_, body) = send_json(
        &app,
        "POST",
        "/salvar-avaliacao",
        json!({"usuario_id": usuario_id, "jogo_nome": "Halo", "nota": 7}),
    )
    .await;
    let id = body["id"].as_i64().unwrap();

    let (status, _) = send_json(
        &app,
        "PUT",
        &format!("/avaliacoes/{id}"),
        json!({"usuario_id": usuario_id, "jogo_nome": "Hades", "nota": 10}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/jogos").await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = get(&app, "/avaliacoes").await;
    assert_eq!(body[0]["nome_jogo"], "Hades");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn foreign_review_update_answers_404(pool: PgPool) {
    let owner = seed_account(&pool, "ana", "ana@test.com").await;
    let intruder = seed_account(&pool, "beto", "beto@test.com").await;
    let app = build_test_app(pool);

    let (_, body) = send_json(
        &app,
        "POST",
        "/salvar-avaliacao",
        json!({"usuario_id": owner, "jogo_nome": "Halo", "nota": 7}),
    )
    .await;
    let id = body["id"].as_i64().unwrap();

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/avaliacoes/{id}"),
        json!({"usuario_id": intruder, "jogo_nome": "Halo", "nota": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        "Avaliação não encontrada ou usuário não autorizado"
    );

    // The review is untouched.
    let (_, body) = get(&app, "/avaliacoes").await;
    assert_eq!(body[0]["nota"], 7);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_review_update_answers_404(pool: PgPool) {
    let usuario_id = seed_account(&pool, "ana", "ana@test.com").await;
    let app = build_test_app(pool);

    let (status, _) = send_json(
        &app,
        "PUT",
        "/avaliacoes/999",
        json!({"usuario_id": usuario_id, "jogo_nome": "Halo", "nota": 5}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn owner_deletes_own_review_once(pool: PgPool) {
    let usuario_id = seed_account(&pool, "ana", "ana@test.com").await;
    let app = build_test_app(pool);

    let (_, body) = send_json(
        &app,
        "POST",
        "/salvar-avaliacao",
        json!({"usuario_id": usuario_id, "jogo_nome": "Halo", "nota": 7}),
    )
    .await;
    let id = body["id"].as_i64().unwrap();

    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/avaliacoes/{id}"),
        json!({"usuario_id": usuario_id}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = get(&app, "/avaliacoes").await;
    assert!(body.as_array().unwrap().is_empty());

    // Deleting the same review again answers 404.
    let (status, _) = send_json(
        &app,
        "DELETE",
        &format!("/avaliacoes/{id}"),
        json!({"usuario_id": usuario_id}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_requires_usuario_id(pool: PgPool) {
    let usuario_id = seed_account(&pool, "ana", "ana@test.com").await;
    let app = build_test_app(pool);

    let (_, body) = send_json(
        &app,
        "POST",
        "/salvar-avaliacao",
        json!({"usuario_id": usuario_id, "jogo_nome": "Halo", "nota": 7}),
    )
    .await;
    let id = body["id"].as_i64().unwrap();

    let (status, body) = send_json(&app, "DELETE", &format!("/avaliacoes/{id}"), json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "ID do usuário é obrigatório");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_catalog_and_listing_are_empty_arrays(pool: PgPool) {
    let app = build_test_app(pool);

    let (status, body) = get(&app, "/jogos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = get(&app, "/avaliacoes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
