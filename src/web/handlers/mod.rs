//! HTML page handlers.
//!
//! List pages are served through the view cache: a hit returns the stored
//! render, a miss (or a path marked stale by a mutation) renders from the
//! store and stores the result.

mod appointments;
mod dashboard;
mod invoices;
mod patients;

pub use appointments::appointments_handler;
pub use dashboard::{dashboard_handler, home_handler};
pub use invoices::invoices_handler;
pub use patients::{patient_detail_handler, patients_handler};

use axum::response::Html;
use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::state::AppState;

/// Rows shown on list pages.
const PAGE_ROWS: i64 = 100;

/// Serves `path` from the view cache, rendering it on a miss.
///
/// A render that finishes after a concurrent invalidation may overwrite the
/// fresher state until the next invalidation or TTL expiry.
async fn cached_page<F, Fut>(state: &AppState, path: &str, render: F) -> Result<Html<String>, AppError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, AppError>>,
{
    if let Some(html) = state.view_cache.get_page(path).await {
        return Ok(Html(html));
    }

    let html = render().await?;
    state.view_cache.put_page(path, &html).await;

    Ok(Html(html))
}

fn display_datetime(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

fn display_optional(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}
