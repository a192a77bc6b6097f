//! Shared harness for the HTTP-level tests.
//!
//! Builds the full router over an in-memory SQLite database and drives it with
//! `tower::ServiceExt::oneshot`. Gateway tests point the upstream URLs at a fake axum
//! server bound to an ephemeral port.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    extract::State,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderMap, Method, Request, StatusCode,
    },
    routing::post,
    Json, Router,
};
use clinic_backend::server::{
    config::{AiConfig, AiProvider, GatewayConfig},
    router,
    service::auth::{password::PasswordService, token::TokenService},
    state::AppState,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

pub const JWT_SECRET: &str = "integration-secret";
pub const PASSWORD: &str = "correct horse battery";

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
    pub passwords: PasswordService,
    _context: TestContext,
}

/// Gateway configuration whose upstreams are unreachable unless overridden.
pub fn gateway_config() -> GatewayConfig {
    GatewayConfig {
        workflow_webhook_url: "http://127.0.0.1:9/webhook".to_string(),
        messaging_client_url: "http://127.0.0.1:9".to_string(),
        clinic_id: 1,
        api_key: None,
        ai: AiConfig {
            provider: AiProvider::Ollama,
            ollama_url: "http://127.0.0.1:9".to_string(),
            ollama_model: "llama3".to_string(),
            openai_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            openai_api_key: None,
            openai_model: "gpt-3.5-turbo".to_string(),
        },
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(gateway_config()).await
}

pub async fn spawn_app_with(gateway: GatewayConfig) -> TestApp {
    let context = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = context.db.clone().unwrap();
    let passwords = PasswordService::new(1_000);

    let state = AppState::new(
        db.clone(),
        reqwest::Client::new(),
        TokenService::new(JWT_SECRET, 1),
        passwords.clone(),
        gateway,
    );

    TestApp {
        router: router::app(state),
        db,
        passwords,
        _context: context,
    }
}

impl TestApp {
    /// Sends a request and returns the status with the body parsed as JSON.
    ///
    /// Non-JSON bodies are returned as a JSON string, empty bodies as `null`.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        self.send_with_headers(method, uri, token, &[], body).await
    }

    pub async fn send_with_headers(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        headers: &[(&str, &str)],
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        (status, value)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(token), Some(body)).await
    }

    /// Registers a clinic with an admin account and returns `(token, clinic_id)`.
    pub async fn register(&self, clinic_name: &str, email: &str) -> (String, i32) {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/auth/register",
                None,
                Some(json!({
                    "clinic_name": clinic_name,
                    "user": {
                        "name": "Admin",
                        "email": email,
                        "password": PASSWORD,
                        "role": "ADMIN"
                    }
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);

        (
            body["token"].as_str().unwrap().to_string(),
            body["user"]["clinic_id"].as_i64().unwrap() as i32,
        )
    }

    /// Creates a patient through the API and returns its ID.
    pub async fn create_patient(&self, token: &str, national_id: &str, name: &str) -> i32 {
        let (status, body) = self
            .post(
                "/api/patients",
                token,
                json!({
                    "national_id": national_id,
                    "name": name,
                    "birth_date": "1990-05-20",
                    "email": format!("{}@example.test", national_id),
                    "phone": "5511988887777"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create patient failed: {}", body);

        body["id"].as_i64().unwrap() as i32
    }

    /// Creates a professional through the API and returns its ID.
    pub async fn create_professional(&self, token: &str, email: &str, name: &str) -> i32 {
        let (status, body) = self
            .post(
                "/api/professionals",
                token,
                json!({
                    "user": { "name": name, "email": email, "password": PASSWORD },
                    "professional": professional_fields(name, email)
                }),
            )
            .await;
        assert_eq!(
            status,
            StatusCode::CREATED,
            "create professional failed: {}",
            body
        );

        body["professional"]["id"].as_i64().unwrap() as i32
    }
}

pub fn professional_fields(name: &str, email: &str) -> Value {
    json!({
        "name": name,
        "birth_date": "1980-01-15",
        "national_id": "98765432100",
        "council": "CRM",
        "council_number": "123456",
        "council_state": "SP",
        "phone": "5511977776666",
        "email": email,
        "telemedicine": true,
        "specialty": "Cardiology"
    })
}

/// Request captured by a fake upstream.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

/// Requests received by a fake upstream, in arrival order.
pub type Received = Arc<Mutex<Vec<ReceivedRequest>>>;

/// Starts a fake upstream answering every POST with `status` and `reply`.
///
/// # Returns
/// - Base URL of the server, e.g. `http://127.0.0.1:41234`
/// - Log of received requests
pub async fn spawn_upstream(status: StatusCode, reply: Value) -> (String, Received) {
    let received: Received = Arc::default();

    let handler = move |State(log): State<Received>, headers: HeaderMap, Json(body): Json<Value>| {
        let reply = reply.clone();
        async move {
            let authorization = headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            log.lock().unwrap().push(ReceivedRequest {
                authorization,
                body,
            });
            (status, Json(reply))
        }
    };

    let app = Router::new()
        .route("/", post(handler.clone()))
        .route("/webhook", post(handler.clone()))
        .route("/api/generate", post(handler.clone()))
        .route("/v1/chat/completions", post(handler))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", address), received)
}
