use super::*;

/// Tests the patient sets used by the conversion reports.
///
/// Expected: active, booked and interacting patient IDs of the clinic
#[tokio::test]
async fn collects_patient_sets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, booked, _, _) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let asked = factory::patient::PatientFactory::new(db, clinic.id)
        .name("Asked")
        .build()
        .await?;
    let inactive = factory::patient::PatientFactory::new(db, clinic.id)
        .active(false)
        .build()
        .await?;
    factory::create_bot_interaction(db, clinic.id, asked.id).await?;
    factory::bot_interaction::BotInteractionFactory::new(db, clinic.id, inactive.id)
        .kind("SCHEDULING")
        .build()
        .await?;
    factory::bot_interaction::BotInteractionFactory::new(db, clinic.id, booked.id)
        .kind("GREETING")
        .build()
        .await?;

    let repo = ReportRepository::new(db);

    let active = repo.active_patient_ids(clinic.id).await?;
    let with_appointments = repo.patient_ids_with_appointments(clinic.id).await?;
    let interacted = repo
        .patient_ids_with_interactions(clinic.id, &["QUESTION", "SCHEDULING"])
        .await?;

    assert_eq!(active, HashSet::from([booked.id, asked.id]));
    assert_eq!(with_appointments, HashSet::from([booked.id]));
    assert_eq!(interacted, HashSet::from([asked.id, inactive.id]));

    Ok(())
}

/// Tests loading active patients by ID.
///
/// Expected: only active patients, ordered by name
#[tokio::test]
async fn loads_active_patients_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;
    let zoe = factory::patient::PatientFactory::new(db, clinic.id)
        .name("Zoe")
        .build()
        .await?;
    let ana = factory::patient::PatientFactory::new(db, clinic.id)
        .name("Ana")
        .build()
        .await?;
    let gone = factory::patient::PatientFactory::new(db, clinic.id)
        .name("Gone")
        .active(false)
        .build()
        .await?;

    let repo = ReportRepository::new(db);
    let patients = repo
        .active_patients_by_ids(clinic.id, &HashSet::from([zoe.id, ana.id, gone.id]))
        .await?;

    let names: Vec<&str> = patients.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Zoe"]);
    assert!(repo
        .active_patients_by_ids(clinic.id, &HashSet::new())
        .await?
        .is_empty());

    Ok(())
}
