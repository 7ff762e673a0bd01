mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(fixtures("news"))]
async fn test_comments_for_article(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/articles/3/comments").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let comments = json["comment"].as_array().unwrap();

    assert_eq!(comments.len(), 2);
    assert_eq!(
        comments[0],
        json!({
            "comment_id": 10,
            "article_id": 3,
            "votes": 0,
            "created_at": "2020-06-20T07:24:00.000Z",
            "author": "icellusedkars",
            "body": "git push origin master"
        })
    );
}

#[sqlx::test(fixtures("news"))]
async fn test_comments_sorted_oldest_first(pool: PgPool) {
    let server = common::make_server(pool);

    let json = server
        .get("/api/articles/1/comments")
        .await
        .json::<serde_json::Value>();
    let comments = json["comment"].as_array().unwrap();

    assert_eq!(comments.len(), 11);
    assert!(comments.iter().all(|c| c["article_id"] == 1));

    let dates: Vec<&str> = comments
        .iter()
        .map(|c| c["created_at"].as_str().unwrap())
        .collect();
    assert!(dates.windows(2).all(|w| w[0] <= w[1]));
}

#[sqlx::test(fixtures("news"))]
async fn test_comments_empty_for_article_without_comments(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/articles/2/comments").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "comment": [] })
    );
}

#[sqlx::test(fixtures("news"))]
async fn test_comments_for_fresh_article(pool: PgPool) {
    let id = common::create_test_article(&pool, "Nobody has read this yet").await;
    let server = common::make_server(pool);

    let response = server.get(&format!("/api/articles/{id}/comments")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["comment"], json!([]));
}

#[sqlx::test(fixtures("news"))]
async fn test_comments_article_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/articles/100/comments").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "msg": "article not found!" })
    );
}

#[sqlx::test(fixtures("news"))]
async fn test_comments_invalid_article_id(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/articles/nonsense/comments").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "msg": "Bad Request" })
    );
}
