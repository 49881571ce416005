// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{bearer, create_test_app, register_and_login};
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_register_validation_and_duplicates() {
    let app = create_test_app();

    let response = app
        .server
        .post("/api/auth/register")
        .json(&json!({
            "name": "Bob",
            "email": "not-an-email",
            "password": "123",
            "role": "admin",
            "bio": "Hi"
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    register_and_login(&app.server, "bob@example.com", "developer").await;

    // POST /api/users 与注册等价
    let response = app
        .server
        .post("/api/users")
        .json(&json!({
            "name": "Bob Again",
            "email": "BOB@example.com",
            "password": "password123",
            "role": "developer",
            "bio": "Hi"
        }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_failure_message() {
    let app = create_test_app();
    register_and_login(&app.server, "bob@example.com", "developer").await;

    let response = app
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "bob@example.com", "password": "wrong-password" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
async fn test_profile_refresh_and_logout() {
    let app = create_test_app();
    let token = register_and_login(&app.server, "bob@example.com", "recruiter").await;

    let response = app
        .server
        .get("/api/user/profile")
        .add_header("Authorization", bearer(&token))
        .await;
    response.assert_status_ok();
    let profile: Value = response.json();
    assert_eq!(profile["email"], "bob@example.com");
    assert_eq!(profile["role"], "recruiter");
    assert!(profile.get("password_hash").is_none());

    let user_id = profile["id"].as_str().unwrap().to_string();
    app.server
        .get(&format!("/api/profile/{}", user_id))
        .add_header("Authorization", bearer(&token))
        .await
        .assert_status_ok();
    app.server
        .get(&format!("/api/users/{}", uuid::Uuid::new_v4()))
        .add_header("Authorization", bearer(&token))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let response = app
        .server
        .get("/api/users")
        .add_header("Authorization", bearer(&token))
        .await;
    let users: Vec<Value> = response.json();
    assert_eq!(users.len(), 1);

    let response = app
        .server
        .post("/api/auth/refresh")
        .add_header("Authorization", bearer(&token))
        .await;
    response.assert_status_ok();
    let refreshed: Value = response.json();
    let new_token = refreshed["access_token"].as_str().unwrap().to_string();
    assert_eq!(refreshed["token_type"], "Bearer");

    // 旧令牌失效，即使访问公开路由也返回 401
    app.server
        .get("/api/jobs")
        .add_header("Authorization", bearer(&token))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    app.server
        .post("/api/auth/logout")
        .add_header("Authorization", bearer(&new_token))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    app.server
        .get("/api/user/profile")
        .add_header("Authorization", bearer(&new_token))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_routes_require_session() {
    let app = create_test_app();

    for path in ["/api/user/profile", "/api/users", "/api/applications"] {
        app.server
            .get(path)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}
