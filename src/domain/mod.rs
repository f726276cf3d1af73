//! Domain layer containing business entities and data-access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Patients, appointments, invoices and their status enums
//! - [`repositories`] - Data access trait definitions
//! - [`outcome`] - Discriminated result of status actions
//! - [`views`] - Cached view paths and which mutations make them stale
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; the orchestration lives in [`crate::application::services`].

pub mod entities;
pub mod outcome;
pub mod repositories;
pub mod views;
