//! Debt account API endpoints

use api_types::{
    amount::AmountChange,
    debt_account::{DebtAccountListResponse, DebtAccountNew, DebtAccountUpdate},
};
use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

use crate::{
    ServerError,
    extract::{PathIds, Payload},
    server::ServerState,
};

pub async fn get_debt_accounts_for_user(
    State(state): State<ServerState>,
    PathIds(user_id): PathIds<Uuid>,
) -> Result<Json<DebtAccountListResponse>, ServerError> {
    tracing::info!("GetDebtAccountsForUser start. UserId: {user_id}");
    let accounts = state
        .ledger
        .debt_accounts()
        .get_debt_accounts_for_user(user_id)
        .await?;
    tracing::info!("GetDebtAccountsForUser end. UserId: {user_id}");
    Ok(Json(accounts))
}

pub async fn create_debt_account_for_user(
    State(state): State<ServerState>,
    PathIds(user_id): PathIds<Uuid>,
    Payload(payload): Payload<DebtAccountNew>,
) -> Result<StatusCode, ServerError> {
    tracing::info!("CreateDebtAccountForUser start. UserId: {user_id}");
    state
        .ledger
        .debt_accounts()
        .create_debt_account_for_user(user_id, payload)
        .await?;
    tracing::info!("CreateDebtAccountForUser end. UserId: {user_id}");
    Ok(StatusCode::ACCEPTED)
}

pub async fn add_amount_to_debt_account_for_user(
    State(state): State<ServerState>,
    PathIds((user_id, debt_account_id)): PathIds<(Uuid, Uuid)>,
    Payload(AmountChange { amount }): Payload<AmountChange>,
) -> Result<StatusCode, ServerError> {
    tracing::info!(
        "AddAmountToDebtAccountForUser start. UserId: {user_id}. DebtAccountId: {debt_account_id}"
    );
    state
        .ledger
        .debt_accounts()
        .add_amount_to_debt_account_for_user(user_id, debt_account_id, amount)
        .await?;
    tracing::info!(
        "AddAmountToDebtAccountForUser end. UserId: {user_id}. DebtAccountId: {debt_account_id}"
    );
    Ok(StatusCode::OK)
}

pub async fn subtract_amount_from_debt_account_for_user(
    State(state): State<ServerState>,
    PathIds((user_id, debt_account_id)): PathIds<(Uuid, Uuid)>,
    Payload(AmountChange { amount }): Payload<AmountChange>,
) -> Result<StatusCode, ServerError> {
    tracing::info!(
        "SubtractAmountFromDebtAccountForUser start. UserId: {user_id}. DebtAccountId: {debt_account_id}"
    );
    state
        .ledger
        .debt_accounts()
        .subtract_amount_from_debt_account_for_user(user_id, debt_account_id, amount)
        .await?;
    tracing::info!(
        "SubtractAmountFromDebtAccountForUser end. UserId: {user_id}. DebtAccountId: {debt_account_id}"
    );
    Ok(StatusCode::OK)
}

pub async fn delete_debt_account_for_user(
    State(state): State<ServerState>,
    PathIds((user_id, debt_account_id)): PathIds<(Uuid, Uuid)>,
) -> Result<StatusCode, ServerError> {
    tracing::info!(
        "DeleteDebtAccountForUser start. UserId: {user_id}. DebtAccountId: {debt_account_id}"
    );
    state
        .ledger
        .debt_accounts()
        .delete_debt_account_for_user(user_id, debt_account_id)
        .await?;
    tracing::info!(
        "DeleteDebtAccountForUser end. UserId: {user_id}. DebtAccountId: {debt_account_id}"
    );
    Ok(StatusCode::OK)
}

pub async fn update_debt_account_for_user(
    State(state): State<ServerState>,
    PathIds((user_id, debt_account_id)): PathIds<(Uuid, Uuid)>,
    Payload(payload): Payload<DebtAccountUpdate>,
) -> Result<StatusCode, ServerError> {
    tracing::info!(
        "UpdateDebtAccountForUser start. UserId: {user_id}. DebtAccountId: {debt_account_id}"
    );
    state
        .ledger
        .debt_accounts()
        .update_debt_account_for_user(user_id, debt_account_id, payload)
        .await?;
    tracing::info!(
        "UpdateDebtAccountForUser end. UserId: {user_id}. DebtAccountId: {debt_account_id}"
    );
    Ok(StatusCode::OK)
}
