use api_types::savings_account::{
    SavingsAccountListResponse, SavingsAccountNew, SavingsAccountUpdate,
};
use uuid::Uuid;

use crate::{ResultLedger, repositories::SavingsAccountRepository};

#[derive(Clone, Debug)]
pub struct SavingsAccountManager {
    repository: SavingsAccountRepository,
}

impl SavingsAccountManager {
    pub(crate) fn new(repository: SavingsAccountRepository) -> Self {
        Self { repository }
    }

    pub async fn get_savings_accounts_for_user(
        &self,
        user_id: Uuid,
    ) -> ResultLedger<SavingsAccountListResponse> {
        let savings_accounts = self
            .repository
            .get_savings_accounts_for_user(user_id)
            .await?;
        Ok(SavingsAccountListResponse {
            user_id,
            savings_accounts,
        })
    }

    pub async fn create_savings_account_for_user(
        &self,
        user_id: Uuid,
        account: SavingsAccountNew,
    ) -> ResultLedger<()> {
        self.repository
            .create_savings_account_for_user(user_id, account)
            .await?;
        Ok(())
    }

    pub async fn add_amount_to_savings_account_for_user(
        &self,
        user_id: Uuid,
        savings_account_id: Uuid,
        amount: f64,
    ) -> ResultLedger<()> {
        self.repository
            .add_amount_to_savings_account_for_user(user_id, savings_account_id, amount)
            .await?;
        Ok(())
    }

    pub async fn subtract_amount_from_savings_account_for_user(
        &self,
        user_id: Uuid,
        savings_account_id: Uuid,
        amount: f64,
    ) -> ResultLedger<()> {
        self.repository
            .subtract_amount_from_savings_account_for_user(user_id, savings_account_id, amount)
            .await?;
        Ok(())
    }

    pub async fn delete_savings_account_for_user(
        &self,
        user_id: Uuid,
        savings_account_id: Uuid,
    ) -> ResultLedger<()> {
        self.repository
            .delete_savings_account_for_user(user_id, savings_account_id)
            .await?;
        Ok(())
    }

    pub async fn update_savings_account_for_user(
        &self,
        user_id: Uuid,
        savings_account_id: Uuid,
        update: SavingsAccountUpdate,
    ) -> ResultLedger<()> {
        self.repository
            .update_savings_account_for_user(user_id, savings_account_id, update)
            .await?;
        Ok(())
    }
}
