//! Expense category API endpoints

use api_types::expense_category::{
    ExpenseCategoryListResponse, ExpenseCategoryNew, UserExpenseCategoryListResponse,
};
use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

use crate::{
    ServerError,
    extract::{PathIds, Payload},
    server::ServerState,
};

pub async fn get_expense_categories(
    State(state): State<ServerState>,
) -> Result<Json<ExpenseCategoryListResponse>, ServerError> {
    tracing::info!("GetExpenseCategories start.");
    let categories = state
        .ledger
        .expense_categories()
        .get_expense_categories()
        .await?;
    tracing::info!("GetExpenseCategories end.");
    Ok(Json(categories))
}

pub async fn get_expense_categories_for_user(
    State(state): State<ServerState>,
    PathIds(user_id): PathIds<Uuid>,
) -> Result<Json<UserExpenseCategoryListResponse>, ServerError> {
    tracing::info!("GetExpenseCategoriesForUser start. UserId: {user_id}");
    let categories = state
        .ledger
        .expense_categories()
        .get_expense_categories_for_user(user_id)
        .await?;
    tracing::info!("GetExpenseCategoriesForUser end. UserId: {user_id}");
    Ok(Json(categories))
}

pub async fn create_expense_category_for_user(
    State(state): State<ServerState>,
    PathIds(user_id): PathIds<Uuid>,
    Payload(payload): Payload<ExpenseCategoryNew>,
) -> Result<StatusCode, ServerError> {
    tracing::info!("CreateExpenseCategoryForUser start. UserId: {user_id}");
    state
        .ledger
        .expense_categories()
        .create_expense_category_for_user(user_id, payload)
        .await?;
    tracing::info!("CreateExpenseCategoryForUser end. UserId: {user_id}");
    Ok(StatusCode::ACCEPTED)
}

/// Handle requests for removing a category from a user's list. The category
/// stays available to everyone else.
pub async fn delete_expense_category_for_user(
    State(state): State<ServerState>,
    PathIds((user_id, expense_category_id)): PathIds<(Uuid, Uuid)>,
) -> Result<StatusCode, ServerError> {
    tracing::info!(
        "DeleteExpenseCategoryForUser start. UserId: {user_id}. ExpenseCategoryId: {expense_category_id}"
    );
    state
        .ledger
        .expense_categories()
        .delete_expense_category_for_user(user_id, expense_category_id)
        .await?;
    tracing::info!(
        "DeleteExpenseCategoryForUser end. UserId: {user_id}. ExpenseCategoryId: {expense_category_id}"
    );
    Ok(StatusCode::OK)
}
