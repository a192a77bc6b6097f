use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        procedure::{ProcedureDto, ProcedureFieldsDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::procedure::{CreateProcedureParams, ProcedureFields, UpdateProcedureParams},
        service::procedure::ProcedureService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping procedure endpoints in OpenAPI documentation
pub static PROCEDURE_TAG: &str = "procedure";

/// Add a procedure to the caller's catalog.
///
/// # Returns
/// - `201 Created` - The stored procedure
/// - `400 Bad Request` - Malformed body or name already used by an active procedure
#[utoipa::path(
    post,
    path = "/api/procedures",
    tag = PROCEDURE_TAG,
    security(("bearer" = [])),
    request_body = ProcedureFieldsDto,
    responses(
        (status = 201, description = "Procedure created", body = ProcedureDto),
        (status = 400, description = "Invalid body or name taken", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_procedure(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<ProcedureFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let procedure = ProcedureService::new(&state.db)
        .create(CreateProcedureParams {
            clinic_id: caller.clinic_id,
            fields: ProcedureFields::from_dto(payload),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(procedure.into_dto())))
}

/// List the active procedures of the caller's clinic, ordered by name.
#[utoipa::path(
    get,
    path = "/api/procedures",
    tag = PROCEDURE_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Active procedures", body = Vec<ProcedureDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_procedures(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let procedures = ProcedureService::new(&state.db)
        .list(caller.clinic_id)
        .await?;

    Ok(Json(
        procedures
            .into_iter()
            .map(|p| p.into_dto())
            .collect::<Vec<ProcedureDto>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/procedures/{id}",
    tag = PROCEDURE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Procedure ID")),
    responses(
        (status = 200, description = "Procedure", body = ProcedureDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Procedure not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_procedure(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let procedure = ProcedureService::new(&state.db)
        .get(caller.clinic_id, id)
        .await?;

    Ok(Json(procedure.into_dto()))
}

/// Replace the fields of an active procedure.
#[utoipa::path(
    put,
    path = "/api/procedures/{id}",
    tag = PROCEDURE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Procedure ID")),
    request_body = ProcedureFieldsDto,
    responses(
        (status = 200, description = "Procedure updated", body = ProcedureDto),
        (status = 400, description = "Invalid body or name taken", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Procedure not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_procedure(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<ProcedureFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let procedure = ProcedureService::new(&state.db)
        .update(UpdateProcedureParams {
            id,
            clinic_id: caller.clinic_id,
            fields: ProcedureFields::from_dto(payload),
        })
        .await?;

    Ok(Json(procedure.into_dto()))
}

/// Remove a procedure from the catalog.
///
/// Links on past appointments are kept.
#[utoipa::path(
    delete,
    path = "/api/procedures/{id}",
    tag = PROCEDURE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Procedure ID")),
    responses(
        (status = 200, description = "Procedure deactivated", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Procedure not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deactivate_procedure(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    ProcedureService::new(&state.db)
        .deactivate(caller.clinic_id, id)
        .await?;

    Ok(Json(MessageDto {
        message: "Procedure deactivated".to_string(),
    }))
}
