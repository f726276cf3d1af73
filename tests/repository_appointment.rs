mod common;

use chrono::Duration;
use clinic_dashboard::domain::entities::{AppointmentStatus, NewAppointment};
use clinic_dashboard::domain::repositories::AppointmentRepository;
use clinic_dashboard::error::AppError;
use clinic_dashboard::infrastructure::persistence::PgAppointmentRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_appointment_joins_patient_name(pool: PgPool) {
    let patient_id = common::insert_patient(&pool, "Laila Mostafa", None).await;
    let repo = PgAppointmentRepository::new(Arc::new(pool));

    let created = repo
        .create(NewAppointment {
            patient_id,
            scheduled_at: common::at(9, 10),
            reason: Some("Blood test".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(created.status, AppointmentStatus::Scheduled);

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.patient_name.as_deref(), Some("Laila Mostafa"));
}

#[sqlx::test]
async fn test_create_appointment_unknown_patient(pool: PgPool) {
    let repo = PgAppointmentRepository::new(Arc::new(pool));

    let result = repo
        .create(NewAppointment {
            patient_id: 999,
            scheduled_at: common::at(9, 10),
            reason: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[sqlx::test]
async fn test_update_status_overwrites(pool: PgPool) {
    let patient_id = common::insert_patient(&pool, "Laila Mostafa", None).await;
    let repo = PgAppointmentRepository::new(Arc::new(pool));
    let created = repo
        .create(NewAppointment {
            patient_id,
            scheduled_at: common::at(9, 10),
            reason: None,
        })
        .await
        .unwrap();

    repo.update_status(created.id, AppointmentStatus::NoShow)
        .await
        .unwrap();
    repo.update_status(created.id, AppointmentStatus::Scheduled)
        .await
        .unwrap();

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.status, AppointmentStatus::Scheduled);
}

#[sqlx::test]
async fn test_update_status_missing_row(pool: PgPool) {
    let repo = PgAppointmentRepository::new(Arc::new(pool));

    let result = repo.update_status(77, AppointmentStatus::Completed).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[sqlx::test]
async fn test_list_filters_and_orders_newest_first(pool: PgPool) {
    let patient_id = common::insert_patient(&pool, "Laila Mostafa", None).await;
    let repo = PgAppointmentRepository::new(Arc::new(pool));

    let base = common::at(9, 10);
    let mut ids = Vec::new();
    for offset in 0..3 {
        let appointment = repo
            .create(NewAppointment {
                patient_id,
                scheduled_at: base + Duration::days(offset),
                reason: None,
            })
            .await
            .unwrap();
        ids.push(appointment.id);
    }
    repo.update_status(ids[0], AppointmentStatus::Cancelled)
        .await
        .unwrap();

    let scheduled = repo
        .list(Some(AppointmentStatus::Scheduled), 0, 10)
        .await
        .unwrap();
    assert_eq!(
        scheduled.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![ids[2], ids[1]]
    );

    assert_eq!(repo.count(None).await.unwrap(), 3);
    assert_eq!(
        repo.count(Some(AppointmentStatus::Cancelled)).await.unwrap(),
        1
    );
}
