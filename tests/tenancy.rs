mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::spawn_app;

/// Expected: a patient read back equals the one created, and other clinics get 404
#[tokio::test]
async fn patients_are_scoped_to_their_clinic() {
    let app = spawn_app().await;
    let (sol, _) = app.register("Clinica Sol", "admin@sol.test").await;
    let (lua, _) = app.register("Clinica Lua", "admin@lua.test").await;

    let id = app.create_patient(&sol, "11122233344", "Joao Souza").await;

    let (status, body) = app.get(&format!("/api/patients/{}", id), &sol).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Joao Souza");
    assert_eq!(body["birth_date"], "1990-05-20");

    let (status, _) = app.get(&format!("/api/patients/{}", id), &lua).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, list) = app.get("/api/patients", &lua).await;
    assert_eq!(status, StatusCode::OK);
    assert!(list.as_array().unwrap().is_empty());

    let (status, _) = app
        .send(
            Method::PUT,
            &format!("/api/patients/{}", id),
            Some(&lua),
            Some(json!({ "name": "Hijacked" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Expected: the same national id is allowed once per clinic
#[tokio::test]
async fn national_id_is_unique_per_clinic() {
    let app = spawn_app().await;
    let (sol, _) = app.register("Clinica Sol", "admin@sol.test").await;
    let (lua, _) = app.register("Clinica Lua", "admin@lua.test").await;

    app.create_patient(&sol, "55566677788", "Ana").await;
    app.create_patient(&lua, "55566677788", "Ana").await;

    let (status, body) = app
        .post(
            "/api/patients",
            &sol,
            json!({
                "national_id": "55566677788",
                "name": "Ana Clone",
                "birth_date": "1991-01-01",
                "email": "clone@example.test",
                "phone": "5511900000000"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "National id already registered for this clinic");
}

/// Expected: deactivation hides the patient and a second deactivation is 404
#[tokio::test]
async fn deactivated_patient_disappears() {
    let app = spawn_app().await;
    let (token, _) = app.register("Clinica Sol", "admin@sol.test").await;
    let id = app.create_patient(&token, "22233344455", "Carla").await;

    let uri = format!("/api/patients/{}/deactivate", id);
    let (status, _) = app.send(Method::PATCH, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&format!("/api/patients/{}", id), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = app.get("/api/patients", &token).await;
    assert!(list.as_array().unwrap().is_empty());

    let (status, _) = app.send(Method::PATCH, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Expected: professionals can read but not register other professionals
#[tokio::test]
async fn only_admins_register_professionals() {
    let app = spawn_app().await;
    let (admin, _) = app.register("Clinica Sol", "admin@sol.test").await;
    app.create_professional(&admin, "rui@sol.test", "Dr. Rui")
        .await;

    let (_, body) = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "rui@sol.test", "password": common::PASSWORD })),
        )
        .await;
    let professional = body["token"].as_str().unwrap().to_string();

    let (status, list) = app.get("/api/professionals", &professional).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, body) = app
        .post(
            "/api/professionals",
            &professional,
            json!({
                "user": { "name": "X", "email": "x@sol.test", "password": "p" },
                "professional": common::professional_fields("X", "x@sol.test")
            }),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Access denied");
}

/// Expected: 400 when `user` or `professional` is missing
#[tokio::test]
async fn professional_requires_both_parts() {
    let app = spawn_app().await;
    let (admin, _) = app.register("Clinica Sol", "admin@sol.test").await;

    let (status, _) = app
        .post(
            "/api/professionals",
            &admin,
            json!({ "user": { "name": "X", "email": "x@sol.test", "password": "p" } }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Expected: procedures keep unique names per clinic and deactivation answers a message
#[tokio::test]
async fn procedure_lifecycle() {
    let app = spawn_app().await;
    let (token, _) = app.register("Clinica Sol", "admin@sol.test").await;

    let (status, created) = app
        .post(
            "/api/procedures",
            &token,
            json!({ "name": "Consulta", "price": 200.0, "duration_minutes": 30 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, _) = app
        .post("/api/procedures", &token, json!({ "name": "Consulta" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, updated) = app
        .send(
            Method::PUT,
            &format!("/api/procedures/{}", id),
            Some(&token),
            Some(json!({ "name": "Consulta inicial", "price": 250.0 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Consulta inicial");
    assert_eq!(updated["price"], 250.0);

    let (status, body) = app
        .send(
            Method::DELETE,
            &format!("/api/procedures/{}", id),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (status, _) = app.get(&format!("/api/procedures/{}", id), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Expected: a missing name is 400 and a duplicate plan is 400
#[tokio::test]
async fn insurance_plan_validation() {
    let app = spawn_app().await;
    let (token, _) = app.register("Clinica Sol", "admin@sol.test").await;

    let (status, body) = app.post("/api/insurance-plans", &token, json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Field 'name' is required");

    let (status, _) = app
        .post("/api/insurance-plans", &token, json!({ "name": "Unimed" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app
        .post("/api/insurance-plans", &token, json!({ "name": "Unimed" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = app.get("/api/insurance-plans", &token).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

/// Expected: appointments reject references owned by another clinic
#[tokio::test]
async fn appointment_rejects_foreign_references() {
    let app = spawn_app().await;
    let (sol, _) = app.register("Clinica Sol", "admin@sol.test").await;
    let (lua, _) = app.register("Clinica Lua", "admin@lua.test").await;

    let professional = app
        .create_professional(&sol, "rui@sol.test", "Dr. Rui")
        .await;
    let foreign_patient = app.create_patient(&lua, "33344455566", "Pedro").await;

    let (status, _) = app
        .post(
            "/api/appointments",
            &sol,
            json!({
                "patient_id": foreign_patient,
                "professional_id": professional,
                "starts_at": "2025-06-01T13:00:00Z"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Expected: booking, listing with names, linking procedures and unlinking them
#[tokio::test]
async fn appointment_lifecycle() {
    let app = spawn_app().await;
    let (token, _) = app.register("Clinica Sol", "admin@sol.test").await;
    let professional = app
        .create_professional(&token, "rui@sol.test", "Dr. Rui")
        .await;
    let patient = app.create_patient(&token, "44455566677", "Beatriz").await;

    let (status, appointment) = app
        .post(
            "/api/appointments",
            &token,
            json!({
                "patient_id": patient,
                "professional_id": professional,
                "starts_at": "2025-06-01T13:00:00Z",
                "ends_at": "2025-06-01T14:00:00Z",
                "price": 300.0
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", appointment);
    assert_eq!(appointment["status"], "SCHEDULED");
    let id = appointment["id"].as_i64().unwrap();

    let (_, list) = app.get("/api/appointments", &token).await;
    assert_eq!(list[0]["patient_name"], "Beatriz");
    assert_eq!(list[0]["professional_name"], "Dr. Rui");

    let (_, procedure) = app
        .post("/api/procedures", &token, json!({ "name": "ECG", "price": 90.0 }))
        .await;
    let procedure_id = procedure["id"].as_i64().unwrap();

    let uri = format!("/api/appointments/{}/procedures", id);
    let (status, body) = app
        .post(&uri, &token, json!({ "procedure_ids": [procedure_id, procedure_id] }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["procedures_added"], 1);

    let (status, _) = app.post(&uri, &token, json!({ "procedure_ids": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, linked) = app.get(&uri, &token).await;
    assert_eq!(linked[0]["name"], "ECG");

    let (status, updated) = app
        .send(
            Method::PATCH,
            &format!("/api/appointments/{}", id),
            Some(&token),
            Some(json!({ "status": "COMPLETED" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "COMPLETED");
    assert_eq!(updated["ends_at"], appointment["ends_at"]);

    let (status, detail) = app.get(&format!("/api/appointments/{}", id), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["patient"]["name"], "Beatriz");
    assert_eq!(detail["procedures"].as_array().unwrap().len(), 1);

    let unlink = format!("/api/appointments/{}/procedures/{}", id, procedure_id);
    let (status, _) = app.send(Method::DELETE, &unlink, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app.send(Method::DELETE, &unlink, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Expected: a non-numeric ID in the path is a JSON 400
#[tokio::test]
async fn malformed_path_id_is_a_json_error() {
    let app = spawn_app().await;
    let (token, _) = app.register("Clinica Sol", "admin@sol.test").await;

    for (method, uri) in [
        (Method::GET, "/api/patients/abc"),
        (Method::DELETE, "/api/appointments/1/procedures/x"),
    ] {
        let (status, body) = app.send(method, uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body["error"].is_string(), "{}", uri);
    }
}

/// Expected: `null` clears the end time and notes, omitted fields stay as stored
#[tokio::test]
async fn appointment_patch_clears_nullable_fields() {
    let app = spawn_app().await;
    let (token, _) = app.register("Clinica Sol", "admin@sol.test").await;
    let professional = app
        .create_professional(&token, "rui@sol.test", "Dr. Rui")
        .await;
    let patient = app.create_patient(&token, "44455566677", "Beatriz").await;

    let (_, appointment) = app
        .post(
            "/api/appointments",
            &token,
            json!({
                "patient_id": patient,
                "professional_id": professional,
                "starts_at": "2025-06-01T13:00:00Z",
                "ends_at": "2025-06-01T14:00:00Z",
                "notes": "Fasting"
            }),
        )
        .await;
    let uri = format!("/api/appointments/{}", appointment["id"]);

    let (status, kept) = app
        .send(Method::PATCH, &uri, Some(&token), Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(kept["notes"], "Fasting");
    assert_eq!(kept["ends_at"], appointment["ends_at"]);

    let (status, cleared) = app
        .send(
            Method::PATCH,
            &uri,
            Some(&token),
            Some(json!({ "ends_at": null, "notes": null })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(cleared["notes"].is_null());
    assert!(cleared["ends_at"].is_null());
    assert_eq!(cleared["starts_at"], appointment["starts_at"]);
}
