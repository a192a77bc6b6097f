use super::*;

/// Tests flattening appointment procedure links.
///
/// Expected: one row per link with the appointment status and catalog price
#[tokio::test]
async fn flattens_links_with_status_and_price() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, patient, professional, scheduled) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let completed =
        factory::appointment::AppointmentFactory::new(db, clinic.id, patient.id, professional.id)
            .status("COMPLETED")
            .build()
            .await?;
    let procedure = factory::procedure::ProcedureFactory::new(db, clinic.id)
        .name("Exam")
        .price(Some(70.0))
        .build()
        .await?;
    factory::create_appointment_procedure(db, scheduled.id, procedure.id).await?;
    factory::create_appointment_procedure(db, completed.id, procedure.id).await?;
    factory::helpers::create_appointment_with_dependencies(db).await?;

    let repo = ReportRepository::new(db);
    let executions = repo.procedure_executions(clinic.id).await?;

    assert_eq!(executions.len(), 2);
    assert_eq!(executions[0].appointment_id, scheduled.id);
    assert_eq!(executions[0].appointment_status, AppointmentStatus::Scheduled);
    assert_eq!(executions[1].appointment_status, AppointmentStatus::Completed);
    assert!(executions
        .iter()
        .all(|e| e.procedure_name == "Exam" && e.procedure_price == Some(70.0)));
    assert!(executions.iter().all(|e| e.patient_id == patient.id));

    Ok(())
}

/// Tests a clinic without appointments.
///
/// Expected: Ok with no rows
#[tokio::test]
async fn returns_empty_without_appointments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;

    let repo = ReportRepository::new(db);

    assert!(repo.procedure_executions(clinic.id).await?.is_empty());

    Ok(())
}

/// Tests a clinic with more appointments than the database accepts as bound parameters.
///
/// Expected: Ok with the single linked appointment
#[tokio::test]
async fn handles_clinics_with_many_appointments() -> Result<(), DbErr> {
    use sea_orm::{ActiveValue, EntityTrait};

    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, patient, professional, linked) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let procedure = factory::procedure::ProcedureFactory::new(db, clinic.id)
        .build()
        .await?;
    factory::create_appointment_procedure(db, linked.id, procedure.id).await?;

    for _ in 0..40 {
        let batch = (0..1_000).map(|_| entity::appointment::ActiveModel {
            clinic_id: ActiveValue::Set(clinic.id),
            patient_id: ActiveValue::Set(patient.id),
            professional_id: ActiveValue::Set(professional.id),
            insurance_plan_id: ActiveValue::Set(None),
            starts_at: ActiveValue::Set(Utc::now()),
            ends_at: ActiveValue::Set(None),
            price: ActiveValue::Set(None),
            telemedicine: ActiveValue::Set(false),
            status: ActiveValue::Set("COMPLETED".to_string()),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        });
        entity::prelude::Appointment::insert_many(batch)
            .exec(db)
            .await?;
    }

    let repo = ReportRepository::new(db);
    let executions = repo.procedure_executions(clinic.id).await?;

    assert_eq!(executions.len(), 1);
    assert_eq!(executions[0].appointment_id, linked.id);
    assert_eq!(executions[0].procedure_id, procedure.id);

    Ok(())
}

/// Tests that links of another clinic's appointments are left out.
///
/// Expected: only the requesting clinic's link is returned
#[tokio::test]
async fn excludes_other_clinics() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, _, _, own) = factory::helpers::create_appointment_with_dependencies(db).await?;
    let (other, _, _, foreign) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let own_procedure = factory::procedure::ProcedureFactory::new(db, clinic.id)
        .name("Own")
        .build()
        .await?;
    let foreign_procedure = factory::procedure::ProcedureFactory::new(db, other.id)
        .name("Foreign")
        .build()
        .await?;
    factory::create_appointment_procedure(db, own.id, own_procedure.id).await?;
    factory::create_appointment_procedure(db, foreign.id, foreign_procedure.id).await?;

    let repo = ReportRepository::new(db);
    let executions = repo.procedure_executions(clinic.id).await?;

    assert_eq!(executions.len(), 1);
    assert_eq!(executions[0].appointment_id, own.id);
    assert_eq!(executions[0].procedure_name, "Own");

    Ok(())
}
