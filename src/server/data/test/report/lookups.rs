use super::*;

/// Tests the name lookups and operational tables.
///
/// Expected: maps keyed by ID and rows of the clinic only
#[tokio::test]
async fn loads_names_and_operational_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, patient, professional, _) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let plan = factory::insurance_plan::InsurancePlanFactory::new(db, clinic.id)
        .name("Amil")
        .build()
        .await?;
    let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    factory::create_operational_control(db, clinic.id, day, 8.5, 320.0).await?;
    let older = Utc::now() - chrono::Duration::days(2);
    factory::create_evaluation(db, clinic.id, Some(patient.id), Some("Good"), older).await?;
    factory::create_evaluation(db, clinic.id, None, Some("Great"), Utc::now()).await?;

    let (other, _, _, _) = factory::helpers::create_appointment_with_dependencies(db).await?;
    factory::create_operational_control(db, other.id, day, 1.0, 1.0).await?;

    let repo = ReportRepository::new(db);

    let professionals = repo.professional_names(clinic.id).await?;
    let patients = repo.patient_names(clinic.id).await?;
    let plans = repo.insurance_plan_names(clinic.id).await?;
    let controls = repo.operational_controls(clinic.id).await?;
    let evaluations = repo.evaluations(clinic.id).await?;

    assert_eq!(professionals.get(&professional.id), Some(&professional.name));
    assert_eq!(professionals.len(), 1);
    assert_eq!(patients.get(&patient.id), Some(&patient.name));
    assert_eq!(plans.get(&plan.id).map(String::as_str), Some("Amil"));
    assert_eq!(controls.len(), 1);
    assert_eq!(controls[0].bot_hours_worked, 8.5);
    assert_eq!(evaluations.len(), 2);
    assert_eq!(evaluations[0].description.as_deref(), Some("Great"));

    Ok(())
}
