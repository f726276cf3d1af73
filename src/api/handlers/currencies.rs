//! Handler for the currency catalog.

use axum::{Json, extract::State};

use crate::api::dto::currency::CurrencyListResponse;
use crate::state::AppState;
use crate::utils::currency::currencies;

/// Lists the selectable currencies in catalog order.
///
/// # Endpoint
///
/// `GET /api/currencies`
pub async fn currency_list_handler(State(state): State<AppState>) -> Json<CurrencyListResponse> {
    Json(CurrencyListResponse {
        default: state.invoice_service.default_currency().to_string(),
        items: currencies().to_vec(),
    })
}
