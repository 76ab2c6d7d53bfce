use api_types::expense_category::{ExpenseCategory, ExpenseCategoryNew};
use uuid::Uuid;

use crate::{
    ConnectionProvider, ResultLedger,
    procedures::expense_categories::{
        CreateExpenseCategoryForUser, DeleteExpenseCategoryForUser, GetExpenseCategories,
        GetExpenseCategoriesForUser,
    },
};

use super::{execute, query};

#[derive(Clone, Debug)]
pub struct ExpenseCategoryRepository {
    provider: ConnectionProvider,
}

impl ExpenseCategoryRepository {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }

    pub async fn get_expense_categories(&self) -> ResultLedger<Vec<ExpenseCategory>> {
        query(&self.provider, &GetExpenseCategories).await
    }

    pub async fn get_expense_categories_for_user(
        &self,
        user_id: Uuid,
    ) -> ResultLedger<Vec<ExpenseCategory>> {
        query(&self.provider, &GetExpenseCategoriesForUser { user_id }).await
    }

    pub async fn create_expense_category_for_user(
        &self,
        user_id: Uuid,
        category: ExpenseCategoryNew,
    ) -> ResultLedger<u64> {
        let procedure = CreateExpenseCategoryForUser {
            user_id,
            expense_category_name: category.expense_category_name,
        };
        execute(&self.provider, &procedure).await
    }

    pub async fn delete_expense_category_for_user(
        &self,
        user_id: Uuid,
        expense_category_id: Uuid,
    ) -> ResultLedger<u64> {
        let procedure = DeleteExpenseCategoryForUser {
            user_id,
            expense_category_id,
        };
        execute(&self.provider, &procedure).await
    }
}
