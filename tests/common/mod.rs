#![allow(dead_code)]

use axum_test::TestServer;
use news_api::infrastructure::EndpointCatalog;
use news_api::routes::router;
use news_api::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const CATALOG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/endpoints.json");

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), EndpointCatalog::new(CATALOG_PATH))
}

pub fn make_server(pool: PgPool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}

/// Reads the bundled catalog the way a client would expect to see it.
pub fn expected_catalog() -> serde_json::Value {
    let raw = std::fs::read_to_string(CATALOG_PATH).unwrap();
    serde_json::from_str(&raw).unwrap()
}

pub async fn create_test_article(pool: &PgPool, title: &str) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO articles (title, topic, author, body) VALUES ($1, 'paper', 'lurker', 'Blank page') RETURNING article_id",
    )
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_comment(
    pool: &PgPool,
    article_id: i32,
    body: &str,
    created_at: &str,
) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO comments (body, article_id, author, created_at) VALUES ($1, $2, 'lurker', $3::timestamptz) RETURNING comment_id",
    )
    .bind(body)
    .bind(article_id)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .unwrap()
}
