//! Managers sit between the HTTP handlers and the repositories. They carry no
//! business rules: each call is forwarded to one repository method, and
//! collection reads are wrapped into their response envelopes.

mod budgets;
mod currencies;
mod debt_accounts;
mod expense_categories;
mod savings_accounts;

pub use budgets::BudgetManager;
pub use currencies::CurrencyManager;
pub use debt_accounts::DebtAccountManager;
pub use expense_categories::ExpenseCategoryManager;
pub use savings_accounts::SavingsAccountManager;
