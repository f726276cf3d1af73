//! DTOs for the currency catalog endpoint.

use serde::Serialize;

use crate::utils::currency::Currency;

/// Response for `GET /api/currencies`.
#[derive(Debug, Serialize)]
pub struct CurrencyListResponse {
    pub default: String,
    pub items: Vec<Currency>,
}
