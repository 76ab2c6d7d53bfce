use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use patch::{Patch, non_null};

mod patch;

pub mod budget {
    use super::*;

    /// A single expense of the user's budget.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Expense {
        pub expense_id: Uuid,
        pub budget_id: Uuid,
        pub user_id: Uuid,
        pub display_name: String,
        pub country_currency_code: String,
        pub value: f64,
    }

    /// Request body for adding an expense.
    ///
    /// The owning budget and the expense category are created on demand.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseNew {
        pub expense_category_name: String,
        pub country_currency_code: String,
        pub value: f64,
    }

    /// Partial update of an expense. Omitted fields keep their stored value.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseUpdate {
        #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
        pub display_name: Option<String>,
        #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
        pub country_currency_code: Option<String>,
        #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
        pub value: Option<f64>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct BudgetResponse {
        pub user_id: Uuid,
        pub expenses: Vec<Expense>,
    }
}

pub mod currency {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Currency {
        pub currency_id: Uuid,
        pub country_currency_code: String,
        pub name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub country: Option<String>,
        /// Units of this currency per South African rand.
        pub rand_exchange_rate: f64,
    }

    /// Request body for adding a currency. A `currencyId` sent by the client
    /// is ignored.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CurrencyNew {
        #[serde(default)]
        pub country: Option<String>,
        pub name: String,
        pub country_currency_code: String,
        pub rand_exchange_rate: f64,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    pub struct CurrencyListResponse {
        pub currencies: Vec<Currency>,
    }
}

pub mod debt_account {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DebtAccount {
        pub debt_account_id: Uuid,
        pub user_id: Uuid,
        pub name: String,
        pub country_currency_code: String,
        pub initial_amount_owed: f64,
        pub current_amount_owed: f64,
        pub target_payoff_date: NaiveDate,
        pub actual_payoff_date: Option<NaiveDate>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DebtAccountNew {
        pub name: String,
        pub amount_owed: f64,
        pub country_currency_code: String,
        /// Calendar date, `YYYY-MM-DD`.
        pub target_payoff_date: NaiveDate,
    }

    /// Partial update of a debt account.
    ///
    /// `actualPayoffDate` is nullable: omit it to keep the stored value, send
    /// `null` to clear it.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DebtAccountUpdate {
        #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
        pub country_currency_code: Option<String>,
        #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
        pub current_amount_owed: Option<f64>,
        #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
        pub target_payoff_date: Option<NaiveDate>,
        #[serde(default, skip_serializing_if = "Patch::is_absent")]
        pub actual_payoff_date: Patch<NaiveDate>,
        #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DebtAccountListResponse {
        pub user_id: Uuid,
        pub debt_accounts: Vec<DebtAccount>,
    }
}

pub mod savings_account {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SavingsAccount {
        pub savings_account_id: Uuid,
        pub user_id: Uuid,
        pub name: String,
        pub country_currency_code: String,
        pub initial_savings_value: f64,
        pub current_savings_value: f64,
        pub savings_target: Option<f64>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SavingsAccountNew {
        pub name: String,
        pub savings_value: f64,
        #[serde(default)]
        pub savings_target: Option<f64>,
        pub country_currency_code: String,
    }

    /// Partial update of a savings account.
    ///
    /// `targetSavingsAmount` is nullable: omit it to keep the stored target,
    /// send `null` to remove it.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SavingsAccountUpdate {
        #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
        pub country_currency_code: Option<String>,
        #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
        pub current_savings_amount: Option<f64>,
        #[serde(default, skip_serializing_if = "Patch::is_absent")]
        pub target_savings_amount: Patch<f64>,
        #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SavingsAccountListResponse {
        pub user_id: Uuid,
        pub savings_accounts: Vec<SavingsAccount>,
    }
}

pub mod expense_category {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseCategory {
        pub expense_category_id: Uuid,
        pub expense_category_name: String,
    }

    /// Request body for linking a category to a user, creating the category
    /// when it does not exist yet.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseCategoryNew {
        pub expense_category_name: String,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseCategoryListResponse {
        pub expense_categories: Vec<ExpenseCategory>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct UserExpenseCategoryListResponse {
        pub user_id: Uuid,
        pub expense_categories: Vec<ExpenseCategory>,
    }
}

pub mod amount {
    use super::*;

    /// Body of the `addAmount` / `subtractAmount` endpoints.
    #[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
    pub struct AmountChange {
        pub amount: f64,
    }
}

pub mod error {
    use super::*;

    /// Body returned alongside 4xx/5xx responses.
    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ErrorResponse {
        pub error_code: i32,
        pub error_message: String,
    }
}
