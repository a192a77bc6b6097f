use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        insurance_plan::{CreateInsurancePlanDto, InsurancePlanDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::insurance_plan::CreateInsurancePlanParams,
        service::insurance_plan::InsurancePlanService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping insurance plan endpoints in OpenAPI documentation
pub static INSURANCE_PLAN_TAG: &str = "insurance_plan";

/// Register an insurance plan accepted by the caller's clinic.
///
/// # Returns
/// - `201 Created` - The stored plan
/// - `400 Bad Request` - Name missing or already registered
#[utoipa::path(
    post,
    path = "/api/insurance-plans",
    tag = INSURANCE_PLAN_TAG,
    security(("bearer" = [])),
    request_body = CreateInsurancePlanDto,
    responses(
        (status = 201, description = "Insurance plan created", body = InsurancePlanDto),
        (status = 400, description = "Name missing or already registered", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_insurance_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateInsurancePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let params = CreateInsurancePlanParams::from_dto(caller.clinic_id, payload)?;
    let plan = InsurancePlanService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(plan.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/insurance-plans",
    tag = INSURANCE_PLAN_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Active insurance plans ordered by name", body = Vec<InsurancePlanDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_insurance_plans(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let plans = InsurancePlanService::new(&state.db)
        .list(caller.clinic_id)
        .await?;

    Ok(Json(
        plans
            .into_iter()
            .map(|p| p.into_dto())
            .collect::<Vec<InsurancePlanDto>>(),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/insurance-plans/{id}",
    tag = INSURANCE_PLAN_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Insurance plan ID")),
    responses(
        (status = 204, description = "Insurance plan deactivated"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Insurance plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deactivate_insurance_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    InsurancePlanService::new(&state.db)
        .deactivate(caller.clinic_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
