//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    AppointmentService, DashboardService, InvoiceService, PatientService, RevalidationService,
    StatusService,
};
use crate::domain::repositories::Repositories;
use crate::infrastructure::cache::ViewCache;

/// Services wired onto one set of repositories and one view cache.
#[derive(Clone)]
pub struct AppState {
    pub status_service: Arc<StatusService>,
    pub revalidation_service: RevalidationService,
    pub patient_service: Arc<PatientService>,
    pub appointment_service: Arc<AppointmentService>,
    pub invoice_service: Arc<InvoiceService>,
    pub dashboard_service: Arc<DashboardService>,
    pub view_cache: Arc<dyn ViewCache>,
}

impl AppState {
    pub fn new(
        repositories: Repositories,
        view_cache: Arc<dyn ViewCache>,
        default_currency: String,
    ) -> Self {
        let revalidation = RevalidationService::new(view_cache.clone());

        Self {
            status_service: Arc::new(StatusService::new(
                repositories.appointments.clone(),
                repositories.invoices.clone(),
                revalidation.clone(),
            )),
            patient_service: Arc::new(PatientService::new(
                repositories.patients.clone(),
                revalidation.clone(),
            )),
            appointment_service: Arc::new(AppointmentService::new(
                repositories.appointments.clone(),
                revalidation.clone(),
            )),
            invoice_service: Arc::new(InvoiceService::new(
                repositories.invoices.clone(),
                revalidation.clone(),
                default_currency,
            )),
            dashboard_service: Arc::new(DashboardService::new(repositories)),
            revalidation_service: revalidation,
            view_cache,
        }
    }
}
