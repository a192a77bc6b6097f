pub use super::appointment::Entity as Appointment;
pub use super::appointment_procedure::Entity as AppointmentProcedure;
pub use super::bot_interaction::Entity as BotInteraction;
pub use super::client_credential::Entity as ClientCredential;
pub use super::clinic::Entity as Clinic;
pub use super::evaluation::Entity as Evaluation;
pub use super::health_professional::Entity as HealthProfessional;
pub use super::insurance_plan::Entity as InsurancePlan;
pub use super::operational_control::Entity as OperationalControl;
pub use super::patient::Entity as Patient;
pub use super::procedure::Entity as Procedure;
pub use super::schedule::Entity as Schedule;
pub use super::user::Entity as User;
