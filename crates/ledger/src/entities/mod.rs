//! sea-orm entities for the tables created by the `migration` crate.

pub mod budgets;
pub mod currencies;
pub mod debt_accounts;
pub mod expense_categories;
pub mod expenses;
pub mod savings_accounts;
pub mod user_expense_categories;
