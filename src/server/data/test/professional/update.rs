use super::*;

/// Tests replacing the editable fields of a professional.
///
/// Expected: Ok with new values and unchanged national id
#[tokio::test]
async fn replaces_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, _, professional) =
        factory::helpers::create_professional_with_dependencies(db).await?;

    let repo = ProfessionalRepository::new(db);
    let updated = repo
        .update(UpdateProfessionalParams {
            id: professional.id,
            clinic_id: clinic.id,
            name: "Dr. Updated".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            council: "CRM".to_string(),
            council_number: "999".to_string(),
            council_state: "RJ".to_string(),
            rqe: Some("42".to_string()),
            phone: "5521000000000".to_string(),
            email: "updated@clinic.test".to_string(),
            telemedicine: true,
            specialty: "Cardiology".to_string(),
        })
        .await?;

    assert_eq!(updated.name, "Dr. Updated");
    assert_eq!(updated.council_state, "RJ");
    assert!(updated.telemedicine);
    assert_eq!(updated.national_id, professional.national_id);

    Ok(())
}
