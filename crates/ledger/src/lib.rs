//! Data access for the bookkeeping API.
//!
//! The crate is layered the same way for every entity: a manager forwards to
//! a repository, the repository runs exactly one [procedure](procedures) per
//! operation through a [`Connection`], and the connection wraps a pooled
//! sea-orm [`DatabaseConnection`].
//!
//! ```no_run
//! # async fn run(db: sea_orm::DatabaseConnection) -> Result<(), ledger::LedgerError> {
//! let ledger = ledger::Ledger::builder().database(db).build().await?;
//! let currencies = ledger.currencies().get_currencies().await?;
//! # Ok(())
//! # }
//! ```

use sea_orm::DatabaseConnection;

pub use connection::{Connection, ConnectionProvider};
pub use error::LedgerError;
pub use managers::{
    BudgetManager, CurrencyManager, DebtAccountManager, ExpenseCategoryManager,
    SavingsAccountManager,
};

mod connection;
mod entities;
mod error;
mod managers;
pub mod procedures;
mod repositories;

type ResultLedger<T> = Result<T, LedgerError>;

/// Entry point of the crate, one manager per entity.
#[derive(Clone, Debug)]
pub struct Ledger {
    budgets: BudgetManager,
    currencies: CurrencyManager,
    debt_accounts: DebtAccountManager,
    expense_categories: ExpenseCategoryManager,
    savings_accounts: SavingsAccountManager,
}

impl Ledger {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    pub fn budgets(&self) -> &BudgetManager {
        &self.budgets
    }

    pub fn currencies(&self) -> &CurrencyManager {
        &self.currencies
    }

    pub fn debt_accounts(&self) -> &DebtAccountManager {
        &self.debt_accounts
    }

    pub fn expense_categories(&self) -> &ExpenseCategoryManager {
        &self.expense_categories
    }

    pub fn savings_accounts(&self) -> &SavingsAccountManager {
        &self.savings_accounts
    }
}

/// The builder for `Ledger`
#[derive(Default)]
pub struct LedgerBuilder {
    database: DatabaseConnection,
}

impl LedgerBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> LedgerBuilder {
        self.database = db;
        self
    }

    /// Construct `Ledger`. Fails when the database cannot be reached.
    pub async fn build(self) -> ResultLedger<Ledger> {
        let provider = ConnectionProvider::new(self.database);
        provider.database().ping().await?;
        tracing::debug!("database reachable, building ledger");

        Ok(Ledger {
            budgets: BudgetManager::new(repositories::BudgetRepository::new(provider.clone())),
            currencies: CurrencyManager::new(repositories::CurrencyRepository::new(
                provider.clone(),
            )),
            debt_accounts: DebtAccountManager::new(repositories::DebtAccountRepository::new(
                provider.clone(),
            )),
            expense_categories: ExpenseCategoryManager::new(
                repositories::ExpenseCategoryRepository::new(provider.clone()),
            ),
            savings_accounts: SavingsAccountManager::new(
                repositories::SavingsAccountRepository::new(provider),
            ),
        })
    }
}
