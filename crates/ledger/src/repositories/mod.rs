//! Repositories: data access, one procedure per operation.
//!
//! Every mutation opens a connection, begins a transaction, executes exactly
//! one procedure and commits. Reads query without a transaction.

mod budgets;
mod currencies;
mod debt_accounts;
mod expense_categories;
mod savings_accounts;

pub use budgets::BudgetRepository;
pub use currencies::CurrencyRepository;
pub use debt_accounts::DebtAccountRepository;
pub use expense_categories::ExpenseCategoryRepository;
pub use savings_accounts::SavingsAccountRepository;

/// Run a block inside a transaction of `$connection`, committing on success.
/// On error the transaction is dropped, which rolls it back.
macro_rules! with_tx {
    ($connection:expr, |$tx:ident| $body:expr) => {{
        let $tx = $connection.begin_transaction().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

use crate::{
    ConnectionProvider, ResultLedger,
    procedures::{NonQuery, Query},
};

async fn execute<P: NonQuery>(provider: &ConnectionProvider, procedure: &P) -> ResultLedger<u64> {
    let connection = provider.open();
    with_tx!(connection, |tx| connection
        .execute_non_query(&tx, procedure)
        .await)
}

async fn query<P: Query>(provider: &ConnectionProvider, procedure: &P) -> ResultLedger<Vec<P::Row>> {
    provider.open().query(procedure).await
}
