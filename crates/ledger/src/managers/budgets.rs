use api_types::budget::{BudgetResponse, ExpenseNew, ExpenseUpdate};
use uuid::Uuid;

use crate::{ResultLedger, repositories::BudgetRepository};

#[derive(Clone, Debug)]
pub struct BudgetManager {
    repository: BudgetRepository,
}

impl BudgetManager {
    pub(crate) fn new(repository: BudgetRepository) -> Self {
        Self { repository }
    }

    pub async fn get_budget_for_user(&self, user_id: Uuid) -> ResultLedger<BudgetResponse> {
        let expenses = self.repository.get_budget_for_user(user_id).await?;
        Ok(BudgetResponse { user_id, expenses })
    }

    pub async fn create_expense_for_user(
        &self,
        user_id: Uuid,
        expense: ExpenseNew,
    ) -> ResultLedger<()> {
        self.repository
            .create_expense_for_user(user_id, expense)
            .await?;
        Ok(())
    }

    pub async fn delete_expense_for_user(&self, user_id: Uuid, expense_id: Uuid) -> ResultLedger<()> {
        self.repository
            .delete_expense_for_user(user_id, expense_id)
            .await?;
        Ok(())
    }

    pub async fn update_expense_for_user(
        &self,
        user_id: Uuid,
        expense_id: Uuid,
        update: ExpenseUpdate,
    ) -> ResultLedger<()> {
        self.repository
            .update_expense_for_user(user_id, expense_id, update)
            .await?;
        Ok(())
    }
}
