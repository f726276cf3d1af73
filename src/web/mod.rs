//! Web layer for browser-based UI.
//!
//! Server-rendered Askama pages for the clinic staff. List pages go through
//! the view cache; status buttons call the JSON API and reload on success.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
