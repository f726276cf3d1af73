//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod appointments;
pub mod currencies;
pub mod health;
pub mod invoices;
pub mod patients;

pub use appointments::{
    appointment_list_handler, create_appointment_handler, update_appointment_status_handler,
};
pub use currencies::currency_list_handler;
pub use health::health_handler;
pub use invoices::{create_invoice_handler, invoice_list_handler, pay_invoice_handler};
pub use patients::{
    create_patient_handler, delete_patient_handler, get_patient_handler, patient_list_handler,
    update_patient_handler,
};
