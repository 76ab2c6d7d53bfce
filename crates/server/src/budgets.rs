//! Budget API endpoints

use api_types::budget::{BudgetResponse, ExpenseNew, ExpenseUpdate};
use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

use crate::{
    ServerError,
    extract::{PathIds, Payload},
    server::ServerState,
};

/// Handle requests for the expenses of a user's budget
pub async fn get_budget_for_user(
    State(state): State<ServerState>,
    PathIds(user_id): PathIds<Uuid>,
) -> Result<Json<BudgetResponse>, ServerError> {
    tracing::info!("GetBudgetForUser start. UserId: {user_id}");
    let budget = state.ledger.budgets().get_budget_for_user(user_id).await?;
    tracing::info!("GetBudgetForUser end. UserId: {user_id}");
    Ok(Json(budget))
}

/// Handle requests for adding an expense to a user's budget
pub async fn create_expense_for_user(
    State(state): State<ServerState>,
    PathIds(user_id): PathIds<Uuid>,
    Payload(payload): Payload<ExpenseNew>,
) -> Result<StatusCode, ServerError> {
    tracing::info!("CreateExpenseForUser start. UserId: {user_id}");
    state
        .ledger
        .budgets()
        .create_expense_for_user(user_id, payload)
        .await?;
    tracing::info!("CreateExpenseForUser end. UserId: {user_id}");
    Ok(StatusCode::ACCEPTED)
}

pub async fn delete_expense_for_user(
    State(state): State<ServerState>,
    PathIds((user_id, expense_id)): PathIds<(Uuid, Uuid)>,
) -> Result<StatusCode, ServerError> {
    tracing::info!("DeleteExpenseForUser start. UserId: {user_id}. ExpenseId: {expense_id}");
    state
        .ledger
        .budgets()
        .delete_expense_for_user(user_id, expense_id)
        .await?;
    tracing::info!("DeleteExpenseForUser end. UserId: {user_id}. ExpenseId: {expense_id}");
    Ok(StatusCode::OK)
}

pub async fn update_expense_for_user(
    State(state): State<ServerState>,
    PathIds((user_id, expense_id)): PathIds<(Uuid, Uuid)>,
    Payload(payload): Payload<ExpenseUpdate>,
) -> Result<StatusCode, ServerError> {
    tracing::info!("UpdateExpenseForUser start. UserId: {user_id}. ExpenseId: {expense_id}");
    state
        .ledger
        .budgets()
        .update_expense_for_user(user_id, expense_id, payload)
        .await?;
    tracing::info!("UpdateExpenseForUser end. UserId: {user_id}. ExpenseId: {expense_id}");
    Ok(StatusCode::OK)
}
