#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use clinic_dashboard::domain::entities::{
    Appointment, AppointmentStatus, Invoice, InvoiceStatus, NewAppointment, NewInvoice,
    NewPatient, Patient, PatientPatch,
};
use clinic_dashboard::domain::repositories::{
    AppointmentRepository, InvoiceRepository, PatientRepository, Repositories,
};
use clinic_dashboard::error::AppError;
use clinic_dashboard::infrastructure::cache::{MemoryViewCache, ViewCache};
use clinic_dashboard::routes::base_router;
use clinic_dashboard::state::AppState;
use serde_json::json;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Record store held in memory, shared by the three repositories.
#[derive(Default)]
pub struct MemoryStore {
    patients: Mutex<Vec<Patient>>,
    appointments: Mutex<Vec<Appointment>>,
    invoices: Mutex<Vec<Invoice>>,
    next_id: AtomicUsize,
    failing: AtomicBool,
    status_writes: AtomicUsize,
}

impl MemoryStore {
    /// Makes every subsequent operation fail as if the database were down.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of `update_status` calls that reached the store.
    pub fn status_writes(&self) -> usize {
        self.status_writes.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1
    }

    fn patient_name(&self, patient_id: i64) -> Option<String> {
        self.patients
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == patient_id)
            .map(|p| p.full_name.clone())
    }

    fn patient_exists(&self, patient_id: i64) -> bool {
        self.patients.lock().unwrap().iter().any(|p| p.id == patient_id)
    }

    pub fn seed_patient(&self, full_name: &str, email: Option<&str>) -> i64 {
        let id = self.next_id();
        self.patients.lock().unwrap().push(Patient {
            id,
            full_name: full_name.to_string(),
            email: email.map(str::to_string),
            phone: None,
            date_of_birth: Some(NaiveDate::from_ymd_opt(1985, 6, 15).unwrap()),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });
        id
    }

    pub fn seed_appointment(
        &self,
        patient_id: i64,
        scheduled_at: DateTime<Utc>,
        status: AppointmentStatus,
    ) -> i64 {
        let id = self.next_id();
        self.appointments.lock().unwrap().push(Appointment {
            id,
            patient_id,
            patient_name: None,
            scheduled_at,
            reason: Some("Check-up".to_string()),
            status,
            created_at: Utc::now(),
        });
        id
    }

    pub fn seed_invoice(
        &self,
        patient_id: i64,
        amount: f64,
        currency: &str,
        status: InvoiceStatus,
    ) -> i64 {
        let id = self.next_id();
        self.invoices.lock().unwrap().push(Invoice {
            id,
            patient_id,
            patient_name: None,
            appointment_id: None,
            amount,
            currency: currency.to_string(),
            status,
            issued_at: Utc::now(),
        });
        id
    }

    pub fn patient_count(&self) -> usize {
        self.patients.lock().unwrap().len()
    }

    pub fn appointment_status(&self, id: i64) -> Option<AppointmentStatus> {
        self.appointments
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.status)
    }

    pub fn invoice_status(&self, id: i64) -> Option<InvoiceStatus> {
        self.invoices
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.status)
    }

    /// Writes a status behind the services' back, leaving caches untouched.
    pub fn force_invoice_status(&self, id: i64, status: InvoiceStatus) {
        if let Some(invoice) = self.invoices.lock().unwrap().iter_mut().find(|i| i.id == id) {
            invoice.status = status;
        }
    }
}

pub struct MemoryPatientRepository(pub Arc<MemoryStore>);
pub struct MemoryAppointmentRepository(pub Arc<MemoryStore>);
pub struct MemoryInvoiceRepository(pub Arc<MemoryStore>);

fn page<T: Clone>(items: &[T], offset: i64, limit: i64) -> Vec<T> {
    items
        .iter()
        .skip(offset as usize)
        .take(limit as usize)
        .cloned()
        .collect()
}

#[async_trait]
impl PatientRepository for MemoryPatientRepository {
    async fn create(&self, new_patient: NewPatient) -> Result<Patient, AppError> {
        self.0.check()?;
        let mut patients = self.0.patients.lock().unwrap();
        if let Some(email) = &new_patient.email
            && patients
                .iter()
                .any(|p| p.email.as_deref().is_some_and(|e| e.eq_ignore_ascii_case(email)))
        {
            return Err(AppError::conflict("Unique constraint violation", json!({})));
        }

        let patient = Patient {
            id: self.0.next_id(),
            full_name: new_patient.full_name,
            email: new_patient.email,
            phone: new_patient.phone,
            date_of_birth: new_patient.date_of_birth,
            notes: new_patient.notes,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        patients.push(patient.clone());
        Ok(patient)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, AppError> {
        self.0.check()?;
        Ok(self.0.patients.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Patient>, AppError> {
        self.0.check()?;
        let mut patients = self.0.patients.lock().unwrap().clone();
        patients.sort_by(|a, b| a.full_name.cmp(&b.full_name).then(a.id.cmp(&b.id)));
        Ok(page(&patients, offset, limit))
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.0.check()?;
        Ok(self.0.patients.lock().unwrap().len() as i64)
    }

    async fn update(&self, id: i64, patch: PatientPatch) -> Result<Patient, AppError> {
        self.0.check()?;
        let mut patients = self.0.patients.lock().unwrap();
        let patient = patients
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found("Patient not found", json!({ "id": id })))?;

        if let Some(full_name) = patch.full_name {
            patient.full_name = full_name;
        }
        if let Some(email) = patch.email {
            patient.email = email;
        }
        if let Some(phone) = patch.phone {
            patient.phone = phone;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            patient.date_of_birth = date_of_birth;
        }
        if let Some(notes) = patch.notes {
            patient.notes = notes;
        }
        patient.updated_at = Utc::now();

        Ok(patient.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.0.check()?;
        let mut patients = self.0.patients.lock().unwrap();
        let before = patients.len();
        patients.retain(|p| p.id != id);
        let deleted = patients.len() < before;
        drop(patients);

        if deleted {
            self.0.appointments.lock().unwrap().retain(|a| a.patient_id != id);
            self.0.invoices.lock().unwrap().retain(|i| i.patient_id != id);
        }
        Ok(deleted)
    }
}

#[async_trait]
impl AppointmentRepository for MemoryAppointmentRepository {
    async fn create(&self, new_appointment: NewAppointment) -> Result<Appointment, AppError> {
        self.0.check()?;
        if !self.0.patient_exists(new_appointment.patient_id) {
            return Err(AppError::bad_request(
                "Foreign key constraint violation",
                json!({}),
            ));
        }

        let appointment = Appointment {
            id: self.0.next_id(),
            patient_id: new_appointment.patient_id,
            patient_name: self.0.patient_name(new_appointment.patient_id),
            scheduled_at: new_appointment.scheduled_at,
            reason: new_appointment.reason,
            status: AppointmentStatus::Scheduled,
            created_at: Utc::now(),
        };
        self.0.appointments.lock().unwrap().push(appointment.clone());
        Ok(appointment)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Appointment>, AppError> {
        self.0.check()?;
        let found = self
            .0
            .appointments
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned();
        Ok(found.map(|mut a| {
            a.patient_name = self.0.patient_name(a.patient_id);
            a
        }))
    }

    async fn list(
        &self,
        status: Option<AppointmentStatus>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Appointment>, AppError> {
        self.0.check()?;
        let mut items: Vec<Appointment> = self
            .0
            .appointments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| status.is_none_or(|s| a.status == s))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at).then(b.id.cmp(&a.id)));
        for a in &mut items {
            a.patient_name = self.0.patient_name(a.patient_id);
        }
        Ok(page(&items, offset, limit))
    }

    async fn count(&self, status: Option<AppointmentStatus>) -> Result<i64, AppError> {
        self.0.check()?;
        Ok(self
            .0
            .appointments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| status.is_none_or(|s| a.status == s))
            .count() as i64)
    }

    async fn update_status(&self, id: i64, status: AppointmentStatus) -> Result<(), AppError> {
        self.0.check()?;
        self.0.status_writes.fetch_add(1, Ordering::SeqCst);
        let mut appointments = self.0.appointments.lock().unwrap();
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::not_found("Appointment not found", json!({ "id": id })))?;
        appointment.status = status;
        Ok(())
    }
}

#[async_trait]
impl InvoiceRepository for MemoryInvoiceRepository {
    async fn create(&self, new_invoice: NewInvoice) -> Result<Invoice, AppError> {
        self.0.check()?;
        if !self.0.patient_exists(new_invoice.patient_id) {
            return Err(AppError::bad_request(
                "Foreign key constraint violation",
                json!({}),
            ));
        }

        let invoice = Invoice {
            id: self.0.next_id(),
            patient_id: new_invoice.patient_id,
            patient_name: self.0.patient_name(new_invoice.patient_id),
            appointment_id: new_invoice.appointment_id,
            amount: new_invoice.amount,
            currency: new_invoice.currency,
            status: InvoiceStatus::Unpaid,
            issued_at: Utc::now(),
        };
        self.0.invoices.lock().unwrap().push(invoice.clone());
        Ok(invoice)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Invoice>, AppError> {
        self.0.check()?;
        Ok(self.0.invoices.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }

    async fn list(
        &self,
        status: Option<InvoiceStatus>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Invoice>, AppError> {
        self.0.check()?;
        let mut items: Vec<Invoice> = self
            .0
            .invoices
            .lock()
            .unwrap()
            .iter()
            .filter(|i| status.is_none_or(|s| i.status == s))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.issued_at.cmp(&a.issued_at).then(b.id.cmp(&a.id)));
        for i in &mut items {
            i.patient_name = self.0.patient_name(i.patient_id);
        }
        Ok(page(&items, offset, limit))
    }

    async fn count(&self, status: Option<InvoiceStatus>) -> Result<i64, AppError> {
        self.0.check()?;
        Ok(self
            .0
            .invoices
            .lock()
            .unwrap()
            .iter()
            .filter(|i| status.is_none_or(|s| i.status == s))
            .count() as i64)
    }

    async fn update_status(&self, id: i64, status: InvoiceStatus) -> Result<(), AppError> {
        self.0.check()?;
        self.0.status_writes.fetch_add(1, Ordering::SeqCst);
        let mut invoices = self.0.invoices.lock().unwrap();
        let invoice = invoices
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| AppError::not_found("Invoice not found", json!({ "id": id })))?;
        invoice.status = status;
        Ok(())
    }
}

/// In-process view cache that also records every invalidated path.
pub struct SpyViewCache {
    inner: MemoryViewCache,
    stale: Mutex<Vec<String>>,
}

impl SpyViewCache {
    pub fn new() -> Self {
        Self {
            inner: MemoryViewCache::new(Duration::from_secs(300)),
            stale: Mutex::new(Vec::new()),
        }
    }

    pub fn stale_paths(&self) -> Vec<String> {
        self.stale.lock().unwrap().clone()
    }
}

#[async_trait]
impl ViewCache for SpyViewCache {
    async fn get_page(&self, path: &str) -> Option<String> {
        self.inner.get_page(path).await
    }

    async fn put_page(&self, path: &str, html: &str) {
        self.inner.put_page(path, html).await
    }

    async fn mark_stale(&self, path: &str) {
        self.stale.lock().unwrap().push(path.to_string());
        self.inner.mark_stale(path).await
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub cache: Arc<SpyViewCache>,
    pub state: AppState,
}

pub fn create_test_context() -> TestContext {
    let store = Arc::new(MemoryStore::default());
    let cache = Arc::new(SpyViewCache::new());

    let repositories = Repositories {
        patients: Arc::new(MemoryPatientRepository(store.clone())),
        appointments: Arc::new(MemoryAppointmentRepository(store.clone())),
        invoices: Arc::new(MemoryInvoiceRepository(store.clone())),
    };

    let state = AppState::new(repositories, cache.clone(), "USD".to_string());

    TestContext {
        store,
        cache,
        state,
    }
}

pub fn make_server(ctx: &TestContext) -> TestServer {
    TestServer::new(base_router(ctx.state.clone(), "static")).unwrap()
}

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
}

pub async fn insert_patient(pool: &sqlx::PgPool, full_name: &str, email: Option<&str>) -> i64 {
    sqlx::query_scalar("INSERT INTO patients (full_name, email) VALUES ($1, $2) RETURNING id")
        .bind(full_name)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}
