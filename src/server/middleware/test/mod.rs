use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::user::{User, UserRole},
    service::auth::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};


const SECRET: &str = "guard-test-secret";

fn tokens() -> TokenService {
    TokenService::new(SECRET, 1)
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

fn issue(user: entity::user::Model) -> String {
    tokens().issue(&User::from_entity(user).unwrap()).unwrap()
}
