use api_types::expense_category::{
    ExpenseCategoryListResponse, ExpenseCategoryNew, UserExpenseCategoryListResponse,
};
use uuid::Uuid;

use crate::{ResultLedger, repositories::ExpenseCategoryRepository};

#[derive(Clone, Debug)]
pub struct ExpenseCategoryManager {
    repository: ExpenseCategoryRepository,
}

impl ExpenseCategoryManager {
    pub(crate) fn new(repository: ExpenseCategoryRepository) -> Self {
        Self { repository }
    }

    pub async fn get_expense_categories(&self) -> ResultLedger<ExpenseCategoryListResponse> {
        let expense_categories = self.repository.get_expense_categories().await?;
        Ok(ExpenseCategoryListResponse { expense_categories })
    }

    pub async fn get_expense_categories_for_user(
        &self,
        user_id: Uuid,
    ) -> ResultLedger<UserExpenseCategoryListResponse> {
        let expense_categories = self
            .repository
            .get_expense_categories_for_user(user_id)
            .await?;
        Ok(UserExpenseCategoryListResponse {
            user_id,
            expense_categories,
        })
    }

    pub async fn create_expense_category_for_user(
        &self,
        user_id: Uuid,
        category: ExpenseCategoryNew,
    ) -> ResultLedger<()> {
        self.repository
            .create_expense_category_for_user(user_id, category)
            .await?;
        Ok(())
    }

    pub async fn delete_expense_category_for_user(
        &self,
        user_id: Uuid,
        expense_category_id: Uuid,
    ) -> ResultLedger<()> {
        self.repository
            .delete_expense_category_for_user(user_id, expense_category_id)
            .await?;
        Ok(())
    }
}
