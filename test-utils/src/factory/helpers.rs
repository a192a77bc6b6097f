//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation and convenience methods for creating entities
//! together with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to derive unique emails, national IDs and names across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a health professional together with its clinic and login user.
///
/// # Returns
/// - `Ok((clinic, user, professional))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_professional_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::clinic::Model,
        entity::user::Model,
        entity::health_professional::Model,
    ),
    DbErr,
> {
    let clinic = crate::factory::clinic::create_clinic(db).await?;
    let user = crate::factory::user::UserFactory::new(db, clinic.id)
        .role("PROFESSIONAL")
        .build()
        .await?;
    let professional =
        crate::factory::professional::create_professional(db, clinic.id, user.id).await?;

    Ok((clinic, user, professional))
}

/// Creates a complete appointment hierarchy with all dependencies.
///
/// This creates:
/// 1. Clinic
/// 2. Patient
/// 3. User and HealthProfessional
/// 4. Appointment in `SCHEDULED` status
///
/// Use the individual factories to customize specific entities.
///
/// # Returns
/// - `Ok((clinic, patient, professional, appointment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_appointment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::clinic::Model,
        entity::patient::Model,
        entity::health_professional::Model,
        entity::appointment::Model,
    ),
    DbErr,
> {
    let (clinic, _, professional) = create_professional_with_dependencies(db).await?;
    let patient = crate::factory::patient::create_patient(db, clinic.id).await?;
    let appointment =
        crate::factory::appointment::create_appointment(db, clinic.id, patient.id, professional.id)
            .await?;

    Ok((clinic, patient, professional, appointment))
}
