//! HTTP-level integration tests for the `/directors` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_director_crud_cycle(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/directors/", json!({"name": "Agnès Varda"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/directors/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": 1, "name": "Agnès Varda"}));

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/directors/1", json!({"name": "Jacques Demy"})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/directors/1").await).await;
    assert_eq!(json["name"], "Jacques Demy");

    let app = common::build_test_app(pool.clone());
    assert_eq!(delete(app, "/directors/1").await.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    assert_eq!(get(app, "/directors/1").await.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_director_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/directors/4", json!({"name": "x"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    assert_eq!(delete(app, "/directors/4").await.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_replace_director_does_not_touch_genres(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/genres/", json!({"name": "Western"})).await;

    // A genre with id 1 exists but no director does.
    let app = common::build_test_app(pool.clone());
    let response = put_json(app, "/directors/1", json!({"name": "Leone"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/genres/1").await).await;
    assert_eq!(json["name"], "Western");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_directors(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    assert_eq!(get(app, "/directors/").await.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    post_json(app, "/directors", json!({"name": "Bong Joon-ho"})).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/directors").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([{"id": 1, "name": "Bong Joon-ho"}])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_deleting_referenced_director_keeps_movie(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/directors/", json!({"name": "Tarkovsky"})).await;

    let app = common::build_test_app(pool.clone());
    post_json(app, "/movies/", json!({"title": "Stalker", "director_id": 1})).await;

    let app = common::build_test_app(pool.clone());
    assert_eq!(delete(app, "/directors/1").await.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, "/movies/?director_id=1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await[0]["title"], "Stalker");
}
