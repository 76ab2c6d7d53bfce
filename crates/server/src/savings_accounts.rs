//! Savings account API endpoints

use api_types::{
    amount::AmountChange,
    savings_account::{SavingsAccountListResponse, SavingsAccountNew, SavingsAccountUpdate},
};
use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

use crate::{
    ServerError,
    extract::{PathIds, Payload},
    server::ServerState,
};

pub async fn get_savings_accounts_for_user(
    State(state): State<ServerState>,
    PathIds(user_id): PathIds<Uuid>,
) -> Result<Json<SavingsAccountListResponse>, ServerError> {
    tracing::info!("GetSavingsAccountsForUser start. UserId: {user_id}");
    let accounts = state
        .ledger
        .savings_accounts()
        .get_savings_accounts_for_user(user_id)
        .await?;
    tracing::info!("GetSavingsAccountsForUser end. UserId: {user_id}");
    Ok(Json(accounts))
}

pub async fn create_savings_account_for_user(
    State(state): State<ServerState>,
    PathIds(user_id): PathIds<Uuid>,
    Payload(payload): Payload<SavingsAccountNew>,
) -> Result<StatusCode, ServerError> {
    tracing::info!("CreateSavingsAccountForUser start. UserId: {user_id}");
    state
        .ledger
        .savings_accounts()
        .create_savings_account_for_user(user_id, payload)
        .await?;
    tracing::info!("CreateSavingsAccountForUser end. UserId: {user_id}");
    Ok(StatusCode::ACCEPTED)
}

pub async fn add_amount_to_savings_account_for_user(
    State(state): State<ServerState>,
    PathIds((user_id, savings_account_id)): PathIds<(Uuid, Uuid)>,
    Payload(AmountChange { amount }): Payload<AmountChange>,
) -> Result<StatusCode, ServerError> {
    tracing::info!(
        "AddAmountToSavingsAccountForUser start. UserId: {user_id}. SavingsAccountId: {savings_account_id}"
    );
    state
        .ledger
        .savings_accounts()
        .add_amount_to_savings_account_for_user(user_id, savings_account_id, amount)
        .await?;
    tracing::info!(
        "AddAmountToSavingsAccountForUser end. UserId: {user_id}. SavingsAccountId: {savings_account_id}"
    );
    Ok(StatusCode::OK)
}

pub async fn subtract_amount_from_savings_account_for_user(
    State(state): State<ServerState>,
    PathIds((user_id, savings_account_id)): PathIds<(Uuid, Uuid)>,
    Payload(AmountChange { amount }): Payload<AmountChange>,
) -> Result<StatusCode, ServerError> {
    tracing::info!(
        "SubtractAmountFromSavingsAccountForUser start. UserId: {user_id}. SavingsAccountId: {savings_account_id}"
    );
    state
        .ledger
        .savings_accounts()
        .subtract_amount_from_savings_account_for_user(user_id, savings_account_id, amount)
        .await?;
    tracing::info!(
        "SubtractAmountFromSavingsAccountForUser end. UserId: {user_id}. SavingsAccountId: {savings_account_id}"
    );
    Ok(StatusCode::OK)
}

pub async fn delete_savings_account_for_user(
    State(state): State<ServerState>,
    PathIds((user_id, savings_account_id)): PathIds<(Uuid, Uuid)>,
) -> Result<StatusCode, ServerError> {
    tracing::info!(
        "DeleteSavingsAccountForUser start. UserId: {user_id}. SavingsAccountId: {savings_account_id}"
    );
    state
        .ledger
        .savings_accounts()
        .delete_savings_account_for_user(user_id, savings_account_id)
        .await?;
    tracing::info!(
        "DeleteSavingsAccountForUser end. UserId: {user_id}. SavingsAccountId: {savings_account_id}"
    );
    Ok(StatusCode::OK)
}

pub async fn update_savings_account_for_user(
    State(state): State<ServerState>,
    PathIds((user_id, savings_account_id)): PathIds<(Uuid, Uuid)>,
    Payload(payload): Payload<SavingsAccountUpdate>,
) -> Result<StatusCode, ServerError> {
    tracing::info!(
        "UpdateSavingsAccountForUser start. UserId: {user_id}. SavingsAccountId: {savings_account_id}"
    );
    state
        .ledger
        .savings_accounts()
        .update_savings_account_for_user(user_id, savings_account_id, payload)
        .await?;
    tracing::info!(
        "UpdateSavingsAccountForUser end. UserId: {user_id}. SavingsAccountId: {savings_account_id}"
    );
    Ok(StatusCode::OK)
}
