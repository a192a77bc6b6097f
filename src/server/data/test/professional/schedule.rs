use super::*;

/// Tests creating and listing schedule slots.
///
/// Expected: Ok with the initial slot returned as AVAILABLE, hidden from other clinics
#[tokio::test]
async fn creates_initial_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, _, professional) =
        factory::helpers::create_professional_with_dependencies(db).await?;
    let other = factory::create_clinic(db).await?;

    let repo = ScheduleRepository::new(db);
    let slot = repo
        .create(CreateScheduleSlotParams::initial(clinic.id, professional.id))
        .await?;

    let slots = repo.get_by_professional(clinic.id, professional.id).await?;

    assert_eq!(slot.status, ScheduleStatus::Available);
    assert_eq!(slots, vec![slot]);
    assert!(repo
        .get_by_professional(other.id, professional.id)
        .await?
        .is_empty());

    Ok(())
}
