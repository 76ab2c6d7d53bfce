use api_types::budget::{Expense, ExpenseNew, ExpenseUpdate};
use uuid::Uuid;

use crate::{
    ConnectionProvider, ResultLedger,
    procedures::budgets::{
        CreateExpenseForUser, DeleteExpenseForUser, GetBudgetForUser, UpdateExpenseForUser,
    },
};

use super::{execute, query};

#[derive(Clone, Debug)]
pub struct BudgetRepository {
    provider: ConnectionProvider,
}

impl BudgetRepository {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }

    pub async fn get_budget_for_user(&self, user_id: Uuid) -> ResultLedger<Vec<Expense>> {
        query(&self.provider, &GetBudgetForUser { user_id }).await
    }

    pub async fn create_expense_for_user(
        &self,
        user_id: Uuid,
        expense: ExpenseNew,
    ) -> ResultLedger<u64> {
        let procedure = CreateExpenseForUser {
            user_id,
            expense_category_name: expense.expense_category_name,
            country_currency_code: expense.country_currency_code,
            value: expense.value,
        };
        execute(&self.provider, &procedure).await
    }

    pub async fn delete_expense_for_user(
        &self,
        user_id: Uuid,
        expense_id: Uuid,
    ) -> ResultLedger<u64> {
        execute(
            &self.provider,
            &DeleteExpenseForUser {
                user_id,
                expense_id,
            },
        )
        .await
    }

    pub async fn update_expense_for_user(
        &self,
        user_id: Uuid,
        expense_id: Uuid,
        update: ExpenseUpdate,
    ) -> ResultLedger<u64> {
        let procedure = UpdateExpenseForUser {
            user_id,
            expense_id,
            display_name: update.display_name,
            country_currency_code: update.country_currency_code,
            value: update.value,
        };
        execute(&self.provider, &procedure).await
    }
}
