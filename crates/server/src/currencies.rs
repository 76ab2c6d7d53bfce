//! Currency API endpoints

use api_types::currency::{CurrencyListResponse, CurrencyNew};
use axum::{Json, extract::State, http::StatusCode};

use crate::{ServerError, extract::Payload, server::ServerState};

pub async fn get_currencies(
    State(state): State<ServerState>,
) -> Result<Json<CurrencyListResponse>, ServerError> {
    tracing::info!("GetCurrencies start.");
    let currencies = state.ledger.currencies().get_currencies().await?;
    tracing::info!("GetCurrencies end.");
    Ok(Json(currencies))
}

/// Handle requests for adding a currency. An already known currency code is
/// accepted and left unchanged.
pub async fn create_currency(
    State(state): State<ServerState>,
    Payload(payload): Payload<CurrencyNew>,
) -> Result<StatusCode, ServerError> {
    tracing::info!(
        "CreateCurrency start. CountryCurrencyCode: {}",
        payload.country_currency_code
    );
    state.ledger.currencies().create_currency(payload).await?;
    tracing::info!("CreateCurrency end.");
    Ok(StatusCode::ACCEPTED)
}
