//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Every row belongs to a
//! clinic, so most factories take the owning `clinic_id` up front.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let clinic = factory::create_clinic(&db).await?;
//! let patient = factory::create_patient(&db, clinic.id).await?;
//!
//! // Create an appointment along with its clinic, patient and professional
//! let (clinic, patient, professional, appointment) =
//!     factory::helpers::create_appointment_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db, clinic.id)
//!     .email("admin@clinic.test")
//!     .role("ADMIN")
//!     .build()
//!     .await?;
//! ```

pub mod appointment;
pub mod appointment_procedure;
pub mod bot_interaction;
pub mod client_credential;
pub mod clinic;
pub mod evaluation;
pub mod helpers;
pub mod insurance_plan;
pub mod operational_control;
pub mod patient;
pub mod procedure;
pub mod professional;
pub mod user;

pub use appointment::create_appointment;
pub use appointment_procedure::create_appointment_procedure;
pub use bot_interaction::create_bot_interaction;
pub use client_credential::create_client_credential;
pub use clinic::create_clinic;
pub use evaluation::create_evaluation;
pub use insurance_plan::create_insurance_plan;
pub use operational_control::create_operational_control;
pub use patient::create_patient;
pub use procedure::create_procedure;
pub use professional::create_professional;
pub use user::{create_admin, create_user};
