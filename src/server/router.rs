use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::MessageDto,
    server::{
        controller::{
            appointment, auth, gateway, insurance_plan, patient, procedure, professional,
            report, user,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Clinic backend", description = "Multi-tenant clinic management API"),
    modifiers(&BearerAuth),
    components(schemas(MessageDto)),
    tags(
        (name = auth::AUTH_TAG, description = "Registration and login"),
        (name = user::USER_TAG, description = "Current account"),
        (name = patient::PATIENT_TAG, description = "Patients of the clinic"),
        (name = professional::PROFESSIONAL_TAG, description = "Health professionals"),
        (name = procedure::PROCEDURE_TAG, description = "Procedure catalog"),
        (name = appointment::APPOINTMENT_TAG, description = "Appointments and their procedures"),
        (name = insurance_plan::INSURANCE_PLAN_TAG, description = "Accepted insurance plans"),
        (name = report::REPORT_TAG, description = "Clinic reports"),
        (name = gateway::GATEWAY_TAG, description = "WhatsApp bot and AI relays")
    )
)]
struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the API routes together with their OpenAPI document.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::first_access))
        .routes(routes!(user::get_me))
        .routes(routes!(patient::create_patient, patient::get_patients))
        .routes(routes!(
            patient::get_patient,
            patient::update_patient
        ))
        .routes(routes!(patient::deactivate_patient))
        .routes(routes!(patient::find_or_create_patient))
        .routes(routes!(
            professional::create_professional,
            professional::get_professionals
        ))
        .routes(routes!(
            professional::get_professional,
            professional::update_professional,
            professional::deactivate_professional
        ))
        .routes(routes!(
            procedure::create_procedure,
            procedure::get_procedures
        ))
        .routes(routes!(
            procedure::get_procedure,
            procedure::update_procedure,
            procedure::deactivate_procedure
        ))
        .routes(routes!(
            appointment::create_appointment,
            appointment::get_appointments
        ))
        .routes(routes!(
            appointment::get_appointment,
            appointment::update_appointment
        ))
        .routes(routes!(
            appointment::add_procedures,
            appointment::get_appointment_procedures
        ))
        .routes(routes!(appointment::remove_appointment_procedure))
        .routes(routes!(
            insurance_plan::create_insurance_plan,
            insurance_plan::get_insurance_plans
        ))
        .routes(routes!(insurance_plan::deactivate_insurance_plan))
        .routes(routes!(report::get_appointment_summary))
        .routes(routes!(report::get_no_shows))
        .routes(routes!(report::get_revenue))
        .routes(routes!(report::get_cancelled))
        .routes(routes!(report::get_private))
        .routes(routes!(report::get_insurance))
        .routes(routes!(report::get_in_person))
        .routes(routes!(report::get_online))
        .routes(routes!(report::get_bot_conversion))
        .routes(routes!(report::get_without_appointment))
        .routes(routes!(report::get_bot_hours))
        .routes(routes!(report::get_bot_savings))
        .routes(routes!(report::get_nps))
        .routes(routes!(report::get_procedures_performed))
        .routes(routes!(report::get_top_procedure_volume))
        .routes(routes!(report::get_top_procedure_revenue))
        .routes(routes!(report::get_top_professional_appointments))
        .routes(routes!(report::get_top_professional_revenue))
        .routes(routes!(report::get_average_hours_online))
        .routes(routes!(report::get_average_hours_in_person))
        .routes(routes!(report::get_top_patient_spending))
        .routes(routes!(gateway::receive_whatsapp_message))
        .routes(routes!(gateway::send_whatsapp_message))
        .routes(routes!(gateway::analyze_message))
}

/// Builds the complete application: API routes, Swagger UI at `/docs`, CORS and
/// request tracing.
pub fn app(state: AppState) -> Router {
    let (router, api) = router().split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
