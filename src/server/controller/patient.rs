use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        patient::{
            CreatePatientDto, FindOrCreatePatientDto, FindOrCreatePatientResultDto, PatientDto,
            UpdatePatientDto,
        },
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, gateway::GatewayGuard},
        model::patient::{
            CreatePatientParams, FindOrCreateOutcome, FindOrCreatePatientParams,
            UpdatePatientParams,
        },
        service::patient::PatientService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping patient endpoints in OpenAPI documentation
pub static PATIENT_TAG: &str = "patient";

/// Register a patient in the caller's clinic.
///
/// # Returns
/// - `201 Created` - The stored patient
/// - `400 Bad Request` - Malformed body or national id already registered in the clinic
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    post,
    path = "/api/patients",
    tag = PATIENT_TAG,
    security(("bearer" = [])),
    request_body = CreatePatientDto,
    responses(
        (status = 201, description = "Patient created", body = PatientDto),
        (status = 400, description = "Invalid body or national id taken", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_patient(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreatePatientDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let patient = PatientService::new(&state.db)
        .create(CreatePatientParams::from_dto(caller.clinic_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(patient.into_dto())))
}

/// List the active patients of the caller's clinic, ordered by name.
#[utoipa::path(
    get,
    path = "/api/patients",
    tag = PATIENT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Active patients", body = Vec<PatientDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_patients(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let patients = PatientService::new(&state.db).list(caller.clinic_id).await?;

    Ok(Json(
        patients
            .into_iter()
            .map(|p| p.into_dto())
            .collect::<Vec<PatientDto>>(),
    ))
}

/// Get an active patient of the caller's clinic.
///
/// # Returns
/// - `200 OK` - The patient
/// - `404 Not Found` - Missing, inactive, or owned by another clinic
#[utoipa::path(
    get,
    path = "/api/patients/{id}",
    tag = PATIENT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "Patient", body = PatientDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_patient(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let patient = PatientService::new(&state.db)
        .get(caller.clinic_id, id)
        .await?;

    Ok(Json(patient.into_dto()))
}

/// Update an active patient. Omitted fields keep their stored value.
///
/// # Returns
/// - `200 OK` - The updated patient
/// - `400 Bad Request` - New national id belongs to another patient of the clinic
/// - `404 Not Found` - Missing, inactive, or owned by another clinic
#[utoipa::path(
    put,
    path = "/api/patients/{id}",
    tag = PATIENT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Patient ID")),
    request_body = UpdatePatientDto,
    responses(
        (status = 200, description = "Patient updated", body = PatientDto),
        (status = 400, description = "Invalid body or national id taken", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_patient(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdatePatientDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let patient = PatientService::new(&state.db)
        .update(UpdatePatientParams::from_dto(id, caller.clinic_id, payload))
        .await?;

    Ok(Json(patient.into_dto()))
}

/// Deactivate a patient.
///
/// # Returns
/// - `204 No Content` - Patient deactivated
/// - `404 Not Found` - Missing, already inactive, or owned by another clinic
#[utoipa::path(
    patch,
    path = "/api/patients/{id}/deactivate",
    tag = PATIENT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Patient ID")),
    responses(
        (status = 204, description = "Patient deactivated"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deactivate_patient(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    PatientService::new(&state.db)
        .deactivate(caller.clinic_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Look up a patient by national id, registering it when absent.
///
/// Called by the workflow engine; the clinic comes from `client_id` in the body and the
/// request is authenticated with the gateway key instead of a bearer token.
///
/// # Returns
/// - `200 OK` - Existing patient, contact data refreshed when it changed
/// - `201 Created` - New patient
/// - `400 Bad Request` - Required field missing
/// - `401 Unauthorized` - Missing or invalid gateway key
/// - `404 Not Found` - Unknown clinic
#[utoipa::path(
    post,
    path = "/api/patients/find-or-create",
    tag = PATIENT_TAG,
    request_body = FindOrCreatePatientDto,
    responses(
        (status = 200, description = "Existing patient", body = FindOrCreatePatientResultDto),
        (status = 201, description = "Patient created", body = FindOrCreatePatientResultDto),
        (status = 400, description = "Required field missing", body = ErrorDto),
        (status = 401, description = "Missing or invalid gateway key", body = ErrorDto),
        (status = 404, description = "Clinic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_or_create_patient(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<FindOrCreatePatientDto>,
) -> Result<impl IntoResponse, AppError> {
    GatewayGuard::new(&state.gateway, &headers).require()?;

    let params = FindOrCreatePatientParams::from_dto(payload)?;
    let (outcome, patient) = PatientService::new(&state.db)
        .find_or_create(params)
        .await?;

    let status = match outcome {
        FindOrCreateOutcome::Existing => StatusCode::OK,
        FindOrCreateOutcome::Created => StatusCode::CREATED,
    };

    Ok((
        status,
        Json(FindOrCreatePatientResultDto {
            status: outcome.into_dto(),
            data: patient.into_dto(),
        }),
    ))
}
