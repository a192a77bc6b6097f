mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{professional_fields, spawn_app, PASSWORD};

/// Expected: register issues a token that `/api/users/me` accepts
#[tokio::test]
async fn register_then_fetch_current_user() {
    let app = spawn_app().await;
    let (token, clinic_id) = app.register("Clinica Sol", "admin@sol.test").await;

    let (status, body) = app.get("/api/users/me", &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "admin@sol.test");
    assert_eq!(body["user"]["role"], "ADMIN");
    assert_eq!(body["user"]["clinic_id"], clinic_id);
}

/// Expected: 400 when the email already belongs to any account
#[tokio::test]
async fn register_rejects_taken_email() {
    let app = spawn_app().await;
    app.register("Clinica Sol", "admin@sol.test").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "clinic_name": "Clinica Lua",
                "user": { "name": "Other", "email": "admin@sol.test", "password": "x", "role": "ADMIN" }
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already registered");
}

/// Expected: 400 with an `{error}` body for a malformed JSON payload
#[tokio::test]
async fn register_rejects_malformed_body() {
    let app = spawn_app().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "clinic_name": "Clinica Sol" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

/// Expected: correct credentials log in, wrong password is 401, unknown email is 404
#[tokio::test]
async fn login_checks_credentials() {
    let app = spawn_app().await;
    app.register("Clinica Sol", "admin@sol.test").await;

    let login = |email: &str, password: &str| {
        json!({ "email": email, "password": password })
    };

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(login("admin@sol.test", PASSWORD)),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));

    let (status, _) = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(login("admin@sol.test", "wrong")),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(login("nobody@sol.test", PASSWORD)),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Expected: first access creates the account and its professional in one call
#[tokio::test]
async fn first_access_creates_professional() {
    let app = spawn_app().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/first-access",
            None,
            Some(json!({
                "clinic": { "name": "Clinica Mar", "city": "Santos" },
                "user": { "name": "Dra. Ana", "email": "ana@mar.test", "password": PASSWORD, "role": "ADMIN" },
                "professional": professional_fields("Dra. Ana", "ana@mar.test")
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["professional"]["name"], "Dra. Ana");

    let token = body["token"].as_str().unwrap();
    let id = body["professional"]["id"].as_i64().unwrap();
    let (status, detail) = app.get(&format!("/api/professionals/{}", id), token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["user"]["email"], "ana@mar.test");
    assert_eq!(detail["schedule"].as_array().unwrap().len(), 1);
}

/// Expected: protected routes answer 401 without or with a garbage token
#[tokio::test]
async fn protected_routes_require_token() {
    let app = spawn_app().await;

    let (status, body) = app.send(Method::GET, "/api/patients", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or missing token");

    let (status, _) = app.get("/api/reports/nps", "not-a-jwt").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// Expected: a deactivated professional can no longer use its token
#[tokio::test]
async fn deactivated_professional_loses_access() {
    let app = spawn_app().await;
    let (admin, _) = app.register("Clinica Sol", "admin@sol.test").await;
    let id = app
        .create_professional(&admin, "rui@sol.test", "Dr. Rui")
        .await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "rui@sol.test", "password": PASSWORD })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let professional_token = body["token"].as_str().unwrap().to_string();

    let (status, _) = app
        .send(
            Method::DELETE,
            &format!("/api/professionals/{}", id),
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get("/api/users/me", &professional_token).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
