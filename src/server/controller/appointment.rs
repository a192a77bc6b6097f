use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        appointment::{
            AddProceduresDto, AppointmentDetailDto, AppointmentDto, AppointmentListItemDto,
            CreateAppointmentDto, ProceduresAddedDto, UpdateAppointmentDto,
        },
        procedure::ProcedureDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::appointment::{CreateAppointmentParams, UpdateAppointmentParams},
        service::appointment::AppointmentService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping appointment endpoints in OpenAPI documentation
pub static APPOINTMENT_TAG: &str = "appointment";

/// Book an appointment.
///
/// The patient, professional and insurance plan must be active records of the caller's
/// clinic. Status defaults to `SCHEDULED`.
///
/// # Returns
/// - `201 Created` - The stored appointment
/// - `400 Bad Request` - Unknown reference or end before start
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = APPOINTMENT_TAG,
    security(("bearer" = [])),
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Appointment created", body = AppointmentDto),
        (status = 400, description = "Invalid body or reference", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let appointment = AppointmentService::new(&state.db)
        .create(CreateAppointmentParams::from_dto(caller.clinic_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(appointment.into_dto())))
}

/// List the clinic's appointments with patient and professional names, by start time.
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = APPOINTMENT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Appointments", body = Vec<AppointmentListItemDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let appointments = AppointmentService::new(&state.db)
        .list(caller.clinic_id)
        .await?;

    Ok(Json(
        appointments
            .into_iter()
            .map(|a| a.into_dto())
            .collect::<Vec<AppointmentListItemDto>>(),
    ))
}

/// Get an appointment with its patient, professional and procedures.
#[utoipa::path(
    get,
    path = "/api/appointments/{id}",
    tag = APPOINTMENT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment detail", body = AppointmentDetailDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let detail = AppointmentService::new(&state.db)
        .get(caller.clinic_id, id)
        .await?;

    Ok(Json(detail.into_dto()))
}

/// Change the status, times or notes of an appointment.
#[utoipa::path(
    patch,
    path = "/api/appointments/{id}",
    tag = APPOINTMENT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = UpdateAppointmentDto,
    responses(
        (status = 200, description = "Appointment updated", body = AppointmentDto),
        (status = 400, description = "Invalid body or end before start", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let appointment = AppointmentService::new(&state.db)
        .update(UpdateAppointmentParams::from_dto(id, caller.clinic_id, payload))
        .await?;

    Ok(Json(appointment.into_dto()))
}

/// Link catalog procedures to an appointment. Already linked procedures are skipped.
#[utoipa::path(
    post,
    path = "/api/appointments/{id}/procedures",
    tag = APPOINTMENT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = AddProceduresDto,
    responses(
        (status = 201, description = "Procedures linked", body = ProceduresAddedDto),
        (status = 400, description = "Empty list or foreign procedure", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_procedures(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<AddProceduresDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let procedures_added = AppointmentService::new(&state.db)
        .add_procedures(caller.clinic_id, id, payload.procedure_ids)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProceduresAddedDto { procedures_added }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/appointments/{id}/procedures",
    tag = APPOINTMENT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Linked procedures ordered by name", body = Vec<ProcedureDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointment_procedures(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let procedures = AppointmentService::new(&state.db)
        .list_procedures(caller.clinic_id, id)
        .await?;

    Ok(Json(
        procedures
            .into_iter()
            .map(|p| p.into_dto())
            .collect::<Vec<ProcedureDto>>(),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/appointments/{id}/procedures/{procedure_id}",
    tag = APPOINTMENT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Appointment ID"),
        ("procedure_id" = i32, Path, description = "Procedure ID")
    ),
    responses(
        (status = 204, description = "Procedure unlinked"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Appointment not found or procedure not linked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_appointment_procedure(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath((id, procedure_id)): AppPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    AppointmentService::new(&state.db)
        .remove_procedure(caller.clinic_id, id, procedure_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
