//! Utility functions shared by the API, pages and CLI.
//!
//! - [`currency`] - Currency catalog and amount formatting
pub mod currency;
