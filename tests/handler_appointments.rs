mod common;

use axum::http::StatusCode;
use clinic_dashboard::domain::entities::AppointmentStatus;
use serde_json::{Value, json};

#[tokio::test]
async fn test_update_status_success_persists_and_invalidates() {
    let ctx = common::create_test_context();
    let patient = ctx.store.seed_patient("Omar Hassan", None);
    let id = ctx
        .store
        .seed_appointment(patient, common::at(2, 9), AppointmentStatus::Scheduled);

    let server = common::make_server(&ctx);
    let response = server
        .post(&format!("/api/appointments/{id}/status"))
        .json(&json!({ "status": "completed" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "success": true }));

    assert_eq!(
        ctx.store.appointment_status(id),
        Some(AppointmentStatus::Completed)
    );
    assert_eq!(ctx.cache.stale_paths(), vec!["/appointments", "/"]);
}

#[tokio::test]
async fn test_update_status_any_transition_is_allowed() {
    let ctx = common::create_test_context();
    let patient = ctx.store.seed_patient("Omar Hassan", None);
    let id = ctx
        .store
        .seed_appointment(patient, common::at(2, 9), AppointmentStatus::Cancelled);

    let server = common::make_server(&ctx);
    for status in ["scheduled", "no_show", "completed", "scheduled"] {
        server
            .post(&format!("/api/appointments/{id}/status"))
            .json(&json!({ "status": status }))
            .await
            .assert_json(&json!({ "success": true }));
    }

    assert_eq!(
        ctx.store.appointment_status(id),
        Some(AppointmentStatus::Scheduled)
    );
}

#[tokio::test]
async fn test_update_status_missing_appointment_reports_failure() {
    let ctx = common::create_test_context();
    let server = common::make_server(&ctx);

    let response = server
        .post("/api/appointments/999/status")
        .json(&json!({ "status": "cancelled" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "success": false, "error": "Appointment not found" }));
    assert!(ctx.cache.stale_paths().is_empty());
}

#[tokio::test]
async fn test_update_status_store_down_reports_failure() {
    let ctx = common::create_test_context();
    let patient = ctx.store.seed_patient("Omar Hassan", None);
    let id = ctx
        .store
        .seed_appointment(patient, common::at(2, 9), AppointmentStatus::Scheduled);
    ctx.store.set_failing(true);

    let server = common::make_server(&ctx);
    let response = server
        .post(&format!("/api/appointments/{id}/status"))
        .json(&json!({ "status": "completed" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Database error");
    assert!(ctx.cache.stale_paths().is_empty());
}

#[tokio::test]
async fn test_update_status_rejects_unknown_status() {
    let ctx = common::create_test_context();
    let patient = ctx.store.seed_patient("Omar Hassan", None);
    let id = ctx
        .store
        .seed_appointment(patient, common::at(2, 9), AppointmentStatus::Scheduled);

    let server = common::make_server(&ctx);
    let response = server
        .post(&format!("/api/appointments/{id}/status"))
        .json(&json!({ "status": "rescheduled" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(ctx.store.status_writes(), 0);
}

#[tokio::test]
async fn test_schedule_appointment() {
    let ctx = common::create_test_context();
    let patient = ctx.store.seed_patient("Nour Khalil", None);

    let server = common::make_server(&ctx);
    let response = server
        .post("/api/appointments")
        .json(&json!({
            "patient_id": patient,
            "scheduled_at": "2026-03-10T14:30:00Z",
            "reason": "Vaccination"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "scheduled");
    assert_eq!(body["patient_name"], "Nour Khalil");
    assert_eq!(ctx.cache.stale_paths(), vec!["/appointments", "/"]);
}

#[tokio::test]
async fn test_schedule_appointment_unknown_patient() {
    let ctx = common::create_test_context();
    let server = common::make_server(&ctx);

    let response = server
        .post("/api/appointments")
        .json(&json!({ "patient_id": 77, "scheduled_at": "2026-03-10T14:30:00Z" }))
        .await;

    response.assert_status_bad_request();
    assert!(ctx.cache.stale_paths().is_empty());
}

#[tokio::test]
async fn test_list_appointments_filters_by_status() {
    let ctx = common::create_test_context();
    let patient = ctx.store.seed_patient("Omar Hassan", None);
    ctx.store
        .seed_appointment(patient, common::at(1, 9), AppointmentStatus::Completed);
    let newest = ctx
        .store
        .seed_appointment(patient, common::at(5, 9), AppointmentStatus::Scheduled);
    ctx.store
        .seed_appointment(patient, common::at(3, 9), AppointmentStatus::Scheduled);

    let server = common::make_server(&ctx);
    let response = server.get("/api/appointments?status=scheduled").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["pagination"]["total_items"], 2);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["items"][0]["id"], newest);
    assert_eq!(body["items"][0]["patient_name"], "Omar Hassan");
}

#[tokio::test]
async fn test_list_appointments_rejects_bad_page_size() {
    let ctx = common::create_test_context();
    let server = common::make_server(&ctx);

    server
        .get("/api/appointments?page_size=5000")
        .await
        .assert_status_bad_request();
}
