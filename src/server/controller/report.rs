//! Reporting endpoints.
//!
//! Every report is restricted to the caller's clinic. Date-range reports take `start`
//! and `end` query parameters; "top" reports answer `{message}` when no row qualifies.

use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        report::{
            AppointmentReportDto, AppointmentSummaryDto, BotConversionDto, BotHoursDto,
            BotSavingsDto, DateRangeQuery, InsuranceReportDto, NpsDto,
            PatientsWithoutAppointmentDto, ProcedureCountDto, ProfessionalAverageHoursDto,
            RevenueDto, TopPatientSpendingDto, TopProcedureRevenueDto, TopProcedureVolumeDto,
            TopProfessionalAppointmentsDto, TopProfessionalRevenueDto, TopResultDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthUser},
        model::report::DateRange,
        service::report::ReportService,
        state::AppState,
        util::extract::AppQuery,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<AuthUser, AppError> {
    AuthGuard::new(&state.db, &state.tokens, headers)
        .require(&[])
        .await
}

/// Appointment totals by status, modality and payer within a date range.
#[utoipa::path(
    get,
    path = "/api/reports/appointments",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Appointment totals", body = AppointmentSummaryDto),
        (status = 400, description = "Missing or invalid date range", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointment_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(query): AppQuery<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;
    let range = DateRange::from_query(query)?;

    let summary = ReportService::new(&state.db)
        .appointment_summary(caller.clinic_id, range)
        .await?;

    Ok(Json(summary.into_dto()))
}

/// No-show appointments within a date range.
#[utoipa::path(
    get,
    path = "/api/reports/appointments/no-shows",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    params(DateRangeQuery),
    responses(
        (status = 200, description = "No-show appointments", body = AppointmentReportDto),
        (status = 400, description = "Missing or invalid date range", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_no_shows(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(query): AppQuery<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;
    let range = DateRange::from_query(query)?;

    let report = ReportService::new(&state.db)
        .no_shows(caller.clinic_id, range)
        .await?;

    Ok(Json(report.into_dto()))
}

/// Revenue of completed appointments within a date range.
#[utoipa::path(
    get,
    path = "/api/reports/appointments/revenue",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Total revenue", body = RevenueDto),
        (status = 400, description = "Missing or invalid date range", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_revenue(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppQuery(query): AppQuery<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;
    let range = DateRange::from_query(query)?;

    let total_revenue = ReportService::new(&state.db)
        .revenue(caller.clinic_id, range)
        .await?;

    Ok(Json(RevenueDto { total_revenue }))
}

#[utoipa::path(
    get,
    path = "/api/reports/appointments/cancelled",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Cancelled appointments, newest first", body = AppointmentReportDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cancelled(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;

    let report = ReportService::new(&state.db)
        .cancelled(caller.clinic_id)
        .await?;

    Ok(Json(report.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/reports/appointments/private",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Completed appointments without insurance", body = AppointmentReportDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_private(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;

    let report = ReportService::new(&state.db)
        .private(caller.clinic_id)
        .await?;

    Ok(Json(report.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/reports/appointments/insurance",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Completed insured appointments per plan", body = InsuranceReportDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_insurance(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;

    let report = ReportService::new(&state.db)
        .insurance(caller.clinic_id)
        .await?;

    Ok(Json(report.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/reports/appointments/in-person",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Completed in-person appointments", body = AppointmentReportDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_in_person(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;

    let report = ReportService::new(&state.db)
        .by_modality(caller.clinic_id, false)
        .await?;

    Ok(Json(report.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/reports/appointments/online",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Completed telemedicine appointments", body = AppointmentReportDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_online(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;

    let report = ReportService::new(&state.db)
        .by_modality(caller.clinic_id, true)
        .await?;

    Ok(Json(report.into_dto()))
}

/// Share of active patients that booked at least one appointment.
#[utoipa::path(
    get,
    path = "/api/reports/bot/conversion",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Bot conversion", body = BotConversionDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bot_conversion(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;

    let conversion = ReportService::new(&state.db)
        .bot_conversion(caller.clinic_id)
        .await?;

    Ok(Json(conversion.into_dto()))
}

/// Patients who asked a question or tried to schedule through the bot but never booked.
#[utoipa::path(
    get,
    path = "/api/reports/bot/without-appointment",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Patients without appointment", body = PatientsWithoutAppointmentDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_without_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;

    let report = ReportService::new(&state.db)
        .without_appointment(caller.clinic_id)
        .await?;

    Ok(Json(report.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/reports/bot/hours-worked",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Hours worked by the bot", body = BotHoursDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bot_hours(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;

    let total_bot_hours = ReportService::new(&state.db)
        .bot_hours(caller.clinic_id)
        .await?;

    Ok(Json(BotHoursDto { total_bot_hours }))
}

#[utoipa::path(
    get,
    path = "/api/reports/bot/savings",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Estimated savings from the bot", body = BotSavingsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bot_savings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;

    let total_estimated_savings = ReportService::new(&state.db)
        .bot_savings(caller.clinic_id)
        .await?;

    Ok(Json(BotSavingsDto {
        total_estimated_savings,
    }))
}

#[utoipa::path(
    get,
    path = "/api/reports/nps",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Satisfaction evaluations, newest first", body = NpsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_nps(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;

    let nps = ReportService::new(&state.db).nps(caller.clinic_id).await?;

    Ok(Json(nps.into_dto()))
}

#[utoipa::path(
    get,
    path = "/api/reports/procedures/total-performed",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Executions per procedure", body = Vec<ProcedureCountDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_procedures_performed(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;

    let ranked = ReportService::new(&state.db)
        .procedures_performed(caller.clinic_id)
        .await?;

    Ok(Json(
        ranked
            .into_iter()
            .map(|r| ProcedureCountDto {
                procedure: r.name,
                total: r.value,
            })
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/reports/procedures/top-volume",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Most executed procedure, or a message when there is none", body = TopProcedureVolumeDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_procedure_volume(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;

    let top = ReportService::new(&state.db)
        .top_procedure_by_volume(caller.clinic_id)
        .await?;

    Ok(Json(TopResultDto::from_option(
        top.map(|r| TopProcedureVolumeDto {
            procedure: r.name,
            total_executions: r.value,
        }),
        "No procedures performed",
    )))
}

#[utoipa::path(
    get,
    path = "/api/reports/procedures/top-revenue",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Highest grossing procedure, or a message when there is none", body = TopProcedureRevenueDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_procedure_revenue(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;

    let top = ReportService::new(&state.db)
        .top_procedure_by_revenue(caller.clinic_id)
        .await?;

    Ok(Json(TopResultDto::from_option(
        top.map(|r| TopProcedureRevenueDto {
            procedure: r.name,
            total_revenue: r.value,
        }),
        "No procedure revenue found",
    )))
}

#[utoipa::path(
    get,
    path = "/api/reports/professionals/top-appointments",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Professional with most completed appointments, or a message", body = TopProfessionalAppointmentsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_professional_appointments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;

    let top = ReportService::new(&state.db)
        .top_professional_by_appointments(caller.clinic_id)
        .await?;

    Ok(Json(TopResultDto::from_option(
        top.map(|r| TopProfessionalAppointmentsDto {
            professional: r.name,
            total_appointments: r.value,
        }),
        "No completed appointments found",
    )))
}

#[utoipa::path(
    get,
    path = "/api/reports/professionals/top-revenue",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Highest grossing professional, or a message", body = TopProfessionalRevenueDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_professional_revenue(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;

    let top = ReportService::new(&state.db)
        .top_professional_by_revenue(caller.clinic_id)
        .await?;

    Ok(Json(TopResultDto::from_option(
        top.map(|r| TopProfessionalRevenueDto {
            professional: r.name,
            total_revenue: r.value,
        }),
        "No professional revenue found",
    )))
}

#[utoipa::path(
    get,
    path = "/api/reports/professionals/average-hours-online",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Mean telemedicine appointment hours per professional", body = Vec<ProfessionalAverageHoursDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_average_hours_online(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    average_hours(state, headers, true).await
}

#[utoipa::path(
    get,
    path = "/api/reports/professionals/average-hours-in-person",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Mean in-person appointment hours per professional", body = Vec<ProfessionalAverageHoursDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_average_hours_in_person(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    average_hours(state, headers, false).await
}

async fn average_hours(
    state: AppState,
    headers: HeaderMap,
    telemedicine: bool,
) -> Result<Json<Vec<ProfessionalAverageHoursDto>>, AppError> {
    let caller = authenticate(&state, &headers).await?;

    let averages = ReportService::new(&state.db)
        .average_hours(caller.clinic_id, telemedicine)
        .await?;

    Ok(Json(
        averages
            .into_iter()
            .map(|r| ProfessionalAverageHoursDto {
                professional: r.name,
                average_hours: r.value,
            })
            .collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/reports/patients/top-spending",
    tag = REPORT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Patient with the highest procedure spend, or a message", body = TopPatientSpendingDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_patient_spending(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = authenticate(&state, &headers).await?;

    let top = ReportService::new(&state.db)
        .top_patient_by_spending(caller.clinic_id)
        .await?;

    Ok(Json(TopResultDto::from_option(
        top.map(|r| TopPatientSpendingDto {
            patient: r.name,
            total_spent: r.value,
        }),
        "No patient spending found",
    )))
}
