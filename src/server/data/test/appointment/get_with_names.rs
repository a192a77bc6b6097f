use super::*;

/// Tests resolving patient and professional names.
///
/// Expected: Ok with both names attached, and nothing from other clinics
#[tokio::test]
async fn attaches_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, patient, professional, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    factory::helpers::create_appointment_with_dependencies(db).await?;

    let repo = AppointmentRepository::new(db);
    let rows = repo
        .get_with_names(clinic.id, &AppointmentFilter::default())
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].appointment.id, appointment.id);
    assert_eq!(rows[0].patient_name, patient.name);
    assert_eq!(rows[0].professional_name, professional.name);

    Ok(())
}
