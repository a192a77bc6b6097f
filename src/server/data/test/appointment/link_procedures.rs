use super::*;

/// Tests that linking the same procedure twice keeps a single link.
///
/// Expected: first call inserts both, second call inserts only the new one
#[tokio::test]
async fn skips_existing_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let exam = factory::procedure::ProcedureFactory::new(db, clinic.id)
        .name("Exam")
        .build()
        .await?;
    let consult = factory::procedure::ProcedureFactory::new(db, clinic.id)
        .name("Consult")
        .build()
        .await?;
    let xray = factory::procedure::ProcedureFactory::new(db, clinic.id)
        .name("X-ray")
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);

    assert_eq!(
        repo.link_procedures(appointment.id, &[exam.id, consult.id])
            .await?,
        2
    );
    assert_eq!(
        repo.link_procedures(appointment.id, &[exam.id, xray.id])
            .await?,
        1
    );

    let names: Vec<String> = repo
        .get_procedures(appointment.id)
        .await?
        .into_iter()
        .map(|p| p.name)
        .collect();

    assert_eq!(names, vec!["Consult", "Exam", "X-ray"]);

    Ok(())
}

/// Tests removing a procedure link.
///
/// Expected: true when the link existed, false on the second attempt
#[tokio::test]
async fn unlinks_procedure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let procedure = factory::create_procedure(db, clinic.id).await?;
    factory::create_appointment_procedure(db, appointment.id, procedure.id).await?;

    let repo = AppointmentRepository::new(db);

    assert!(repo.unlink_procedure(appointment.id, procedure.id).await?);
    assert!(!repo.unlink_procedure(appointment.id, procedure.id).await?);
    assert!(repo.get_procedures(appointment.id).await?.is_empty());

    Ok(())
}
