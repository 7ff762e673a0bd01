mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

// ─── SINGLE ARTICLE ──────────────────────────────────────────────────────────

#[sqlx::test(fixtures("news"))]
async fn test_article_by_id_success(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/articles/1").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let article = &json["article"];

    assert_eq!(article["article_id"], 1);
    assert_eq!(article["title"], "Living in the shadow of a great man");
    assert_eq!(article["topic"], "mitch");
    assert_eq!(article["author"], "butter_bridge");
    assert_eq!(article["body"], "I find this existence challenging");
    assert_eq!(article["created_at"], "2020-07-09T20:11:00.000Z");
    assert_eq!(article["votes"], 100);
    assert_eq!(
        article["article_img_url"],
        "https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700"
    );
}

#[sqlx::test(fixtures("news"))]
async fn test_article_by_id_exact_fields(pool: PgPool) {
    let server = common::make_server(pool);

    let json = server
        .get("/api/articles/5")
        .await
        .json::<serde_json::Value>();

    let mut keys: Vec<&str> = json["article"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();

    assert_eq!(
        keys,
        [
            "article_id",
            "article_img_url",
            "author",
            "body",
            "created_at",
            "title",
            "topic",
            "votes"
        ]
    );
}

#[sqlx::test(fixtures("news"))]
async fn test_article_by_id_matches_requested_id(pool: PgPool) {
    let server = common::make_server(pool);

    for id in 1..=13 {
        let response = server.get(&format!("/api/articles/{id}")).await;

        response.assert_status_ok();
        assert_eq!(response.json::<serde_json::Value>()["article"]["article_id"], id);
    }
}

#[sqlx::test(fixtures("news"))]
async fn test_article_by_id_not_found(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/articles/100").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "msg": "article not found!" })
    );
}

#[sqlx::test(fixtures("news"))]
async fn test_article_by_id_invalid(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/articles/nonsense").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "msg": "Bad Request" })
    );
}

#[sqlx::test(fixtures("news"))]
async fn test_article_by_id_out_of_range(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/articles/99999999999").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<serde_json::Value>()["msg"], "Bad Request");
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[sqlx::test(fixtures("news"))]
async fn test_article_list_success(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/articles").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let articles = json["articles"].as_array().unwrap();

    assert_eq!(articles.len(), 13);
    for article in articles {
        assert!(article.get("body").is_none());
        assert!(article["comment_count"].is_number());
    }
}

#[sqlx::test(fixtures("news"))]
async fn test_article_list_newest_first(pool: PgPool) {
    let server = common::make_server(pool);

    let json = server.get("/api/articles").await.json::<serde_json::Value>();
    let articles = json["articles"].as_array().unwrap();

    let dates: Vec<&str> = articles
        .iter()
        .map(|a| a["created_at"].as_str().unwrap())
        .collect();
    assert!(dates.windows(2).all(|w| w[0] >= w[1]));

    assert_eq!(articles[0]["article_id"], 3);
    assert_eq!(articles[0]["comment_count"], 2);
}

#[sqlx::test(fixtures("news"))]
async fn test_article_list_comment_counts(pool: PgPool) {
    let server = common::make_server(pool);

    let json = server.get("/api/articles").await.json::<serde_json::Value>();
    let articles = json["articles"].as_array().unwrap();

    let count_for = |id: i64| {
        articles
            .iter()
            .find(|a| a["article_id"] == id)
            .map(|a| a["comment_count"].as_i64().unwrap())
            .unwrap()
    };

    assert_eq!(count_for(1), 11);
    assert_eq!(count_for(2), 0);
    assert_eq!(count_for(9), 2);
}
