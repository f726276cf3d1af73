//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod action;
pub mod appointment;
pub mod currency;
pub mod health;
pub mod invoice;
pub mod pagination;
pub mod patient;
