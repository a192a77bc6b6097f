use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthResponseDto, FirstAccessDto, FirstAccessResponseDto, LoginDto, RegisterDto},
    },
    server::{
        error::AppError,
        model::auth::{FirstAccessParams, LoginParams, RegisterParams},
        service::auth::AuthService,
        state::AppState,
        util::extract::AppJson,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a clinic together with its first account.
///
/// Creates a clinic with blank contact data and the given account, then signs a token
/// for that account.
///
/// # Returns
/// - `201 Created` - Account and token
/// - `400 Bad Request` - Malformed body or email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Clinic and account created", body = AuthResponseDto),
        (status = 400, description = "Invalid body or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens, &state.passwords);

    let session = service.register(RegisterParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(session.into_dto())))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Account and token
/// - `401 Unauthorized` - Wrong password or inactive account
/// - `404 Not Found` - Unknown email
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 401, description = "Wrong password or inactive account", body = ErrorDto),
        (status = 404, description = "Unknown email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens, &state.passwords);

    let session = service.login(LoginParams::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(session.into_dto())))
}

/// Complete onboarding of a new clinic.
///
/// Creates the clinic, the account, its professional record and the professional's
/// initial schedule slot.
///
/// # Returns
/// - `201 Created` - Account, professional summary and token
/// - `400 Bad Request` - Malformed body or email already registered
#[utoipa::path(
    post,
    path = "/api/auth/first-access",
    tag = AUTH_TAG,
    request_body = FirstAccessDto,
    responses(
        (status = 201, description = "Clinic, account and professional created", body = FirstAccessResponseDto),
        (status = 400, description = "Invalid body or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn first_access(
    State(state): State<AppState>,
    AppJson(payload): AppJson<FirstAccessDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens, &state.passwords);

    let session = service
        .first_access(FirstAccessParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(session.into_dto())))
}
