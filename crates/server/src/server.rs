use axum::{
    Router, middleware,
    routing::{delete, get, patch},
};
use ledger::Ledger;

use std::sync::Arc;

use crate::{
    auth::{self, JwtService},
    budgets, currencies, debt_accounts, expense_categories, savings_accounts, tokens,
};

#[derive(Clone)]
pub struct ServerState {
    pub ledger: Arc<Ledger>,
    pub jwt: Arc<JwtService>,
}

/// Build the application router. Everything except `/tokens` requires a
/// bearer token.
pub fn router(ledger: Ledger, jwt: JwtService) -> Router {
    let state = ServerState {
        ledger: Arc::new(ledger),
        jwt: Arc::new(jwt),
    };

    let protected = Router::new()
        .route(
            "/budgets/user/{user_id}",
            get(budgets::get_budget_for_user).post(budgets::create_expense_for_user),
        )
        .route(
            "/budgets/user/{user_id}/expense/{expense_id}",
            delete(budgets::delete_expense_for_user).patch(budgets::update_expense_for_user),
        )
        .route(
            "/currencies",
            get(currencies::get_currencies).post(currencies::create_currency),
        )
        .route(
            "/debtAccounts/user/{user_id}",
            get(debt_accounts::get_debt_accounts_for_user)
                .post(debt_accounts::create_debt_account_for_user),
        )
        .route(
            "/debtAccounts/user/{user_id}/debtAccount/{id}",
            delete(debt_accounts::delete_debt_account_for_user)
                .patch(debt_accounts::update_debt_account_for_user),
        )
        .route(
            "/debtAccounts/user/{user_id}/debtAccount/{id}/addAmount",
            patch(debt_accounts::add_amount_to_debt_account_for_user),
        )
        .route(
            "/debtAccounts/user/{user_id}/debtAccount/{id}/subtractAmount",
            patch(debt_accounts::subtract_amount_from_debt_account_for_user),
        )
        .route(
            "/expenseCategories",
            get(expense_categories::get_expense_categories),
        )
        .route(
            "/expenseCategories/user/{user_id}",
            get(expense_categories::get_expense_categories_for_user)
                .post(expense_categories::create_expense_category_for_user),
        )
        .route(
            "/expenseCategories/user/{user_id}/expense/{id}",
            delete(expense_categories::delete_expense_category_for_user),
        )
        .route(
            "/savingsAccounts/user/{user_id}",
            get(savings_accounts::get_savings_accounts_for_user)
                .post(savings_accounts::create_savings_account_for_user),
        )
        .route(
            "/savingsAccounts/user/{user_id}/savingsAccount/{id}",
            delete(savings_accounts::delete_savings_account_for_user)
                .patch(savings_accounts::update_savings_account_for_user),
        )
        .route(
            "/savingsAccounts/user/{user_id}/savingsAccount/{id}/addAmount",
            patch(savings_accounts::add_amount_to_savings_account_for_user),
        )
        .route(
            "/savingsAccounts/user/{user_id}/savingsAccount/{id}/subtractAmount",
            patch(savings_accounts::subtract_amount_from_savings_account_for_user),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::authorize,
        ));

    Router::new()
        .route("/tokens", get(tokens::get_random_token))
        .merge(protected)
        .with_state(state)
}

pub async fn run_with_listener(
    ledger: Ledger,
    jwt: JwtService,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(ledger, jwt)).await
}
