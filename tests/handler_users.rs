mod common;

use sqlx::PgPool;

#[sqlx::test(fixtures("news"))]
async fn test_users_list_success(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/api/users").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let users = json["users"].as_array().unwrap();

    assert_eq!(users.len(), 4);
    for user in users {
        assert!(user["username"].is_string());
        assert!(user["name"].is_string());
        assert!(user["avatar_url"].is_string());
    }
    assert_eq!(users[0]["username"], "butter_bridge");
}
