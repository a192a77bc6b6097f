use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        professional::{
            CreateProfessionalDto, CreatedProfessionalDto, ProfessionalDetailDto,
            ProfessionalDto, UpdateProfessionalDto, UpdatedProfessionalDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::professional::{NewProfessionalParams, UpdateProfessionalParams},
        service::professional::ProfessionalService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping professional endpoints in OpenAPI documentation
pub static PROFESSIONAL_TAG: &str = "professional";

/// Register a health professional together with a `PROFESSIONAL` login account.
///
/// Also creates the professional's initial schedule slot.
///
/// # Access Control
/// - `Admin` - Only admins can register professionals
///
/// # Returns
/// - `201 Created` - Professional summary and account
/// - `400 Bad Request` - `user` or `professional` missing, or email already registered
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    post,
    path = "/api/professionals",
    tag = PROFESSIONAL_TAG,
    security(("bearer" = [])),
    request_body = CreateProfessionalDto,
    responses(
        (status = 201, description = "Professional created", body = CreatedProfessionalDto),
        (status = 400, description = "Missing parts or email taken", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_professional(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateProfessionalDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let params = NewProfessionalParams::from_dto(caller.clinic_id, payload)?;
    let created = ProfessionalService::new(&state.db, &state.passwords)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(created.into_dto())))
}

/// List the active professionals of the caller's clinic, ordered by name.
#[utoipa::path(
    get,
    path = "/api/professionals",
    tag = PROFESSIONAL_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Active professionals", body = Vec<ProfessionalDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_professionals(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let professionals = ProfessionalService::new(&state.db, &state.passwords)
        .list(caller.clinic_id)
        .await?;

    Ok(Json(
        professionals
            .into_iter()
            .map(|p| p.into_dto())
            .collect::<Vec<ProfessionalDto>>(),
    ))
}

/// Get a professional with its linked account and schedule slots.
#[utoipa::path(
    get,
    path = "/api/professionals/{id}",
    tag = PROFESSIONAL_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Professional ID")),
    responses(
        (status = 200, description = "Professional detail", body = ProfessionalDetailDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Professional not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_professional(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let detail = ProfessionalService::new(&state.db, &state.passwords)
        .get(caller.clinic_id, id)
        .await?;

    Ok(Json(detail.into_dto()))
}

/// Replace the registration data of a professional.
///
/// # Access Control
/// - `Admin` - Only admins can update professionals
#[utoipa::path(
    put,
    path = "/api/professionals/{id}",
    tag = PROFESSIONAL_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Professional ID")),
    request_body = UpdateProfessionalDto,
    responses(
        (status = 200, description = "Professional updated", body = UpdatedProfessionalDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Professional not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_professional(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateProfessionalDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let professional = ProfessionalService::new(&state.db, &state.passwords)
        .update(UpdateProfessionalParams::from_dto(
            id,
            caller.clinic_id,
            payload,
        ))
        .await?;

    Ok(Json(UpdatedProfessionalDto {
        professional: professional.into_dto(),
    }))
}

/// Deactivate a professional and its login account.
///
/// # Access Control
/// - `Admin` - Only admins can deactivate professionals
#[utoipa::path(
    delete,
    path = "/api/professionals/{id}",
    tag = PROFESSIONAL_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Professional ID")),
    responses(
        (status = 204, description = "Professional deactivated"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Professional not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deactivate_professional(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    ProfessionalService::new(&state.db, &state.passwords)
        .deactivate(caller.clinic_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
