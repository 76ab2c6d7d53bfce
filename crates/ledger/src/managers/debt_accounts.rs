use api_types::debt_account::{DebtAccountListResponse, DebtAccountNew, DebtAccountUpdate};
use uuid::Uuid;

use crate::{ResultLedger, repositories::DebtAccountRepository};

#[derive(Clone, Debug)]
pub struct DebtAccountManager {
    repository: DebtAccountRepository,
}

impl DebtAccountManager {
    pub(crate) fn new(repository: DebtAccountRepository) -> Self {
        Self { repository }
    }

    pub async fn get_debt_accounts_for_user(
        &self,
        user_id: Uuid,
    ) -> ResultLedger<DebtAccountListResponse> {
        let debt_accounts = self.repository.get_debt_accounts_for_user(user_id).await?;
        Ok(DebtAccountListResponse {
            user_id,
            debt_accounts,
        })
    }

    pub async fn create_debt_account_for_user(
        &self,
        user_id: Uuid,
        account: DebtAccountNew,
    ) -> ResultLedger<()> {
        self.repository
            .create_debt_account_for_user(user_id, account)
            .await?;
        Ok(())
    }

    pub async fn add_amount_to_debt_account_for_user(
        &self,
        user_id: Uuid,
        debt_account_id: Uuid,
        amount: f64,
    ) -> ResultLedger<()> {
        self.repository
            .add_amount_to_debt_account_for_user(user_id, debt_account_id, amount)
            .await?;
        Ok(())
    }

    pub async fn subtract_amount_from_debt_account_for_user(
        &self,
        user_id: Uuid,
        debt_account_id: Uuid,
        amount: f64,
    ) -> ResultLedger<()> {
        self.repository
            .subtract_amount_from_debt_account_for_user(user_id, debt_account_id, amount)
            .await?;
        Ok(())
    }

    pub async fn delete_debt_account_for_user(
        &self,
        user_id: Uuid,
        debt_account_id: Uuid,
    ) -> ResultLedger<()> {
        self.repository
            .delete_debt_account_for_user(user_id, debt_account_id)
            .await?;
        Ok(())
    }

    pub async fn update_debt_account_for_user(
        &self,
        user_id: Uuid,
        debt_account_id: Uuid,
        update: DebtAccountUpdate,
    ) -> ResultLedger<()> {
        self.repository
            .update_debt_account_for_user(user_id, debt_account_id, update)
            .await?;
        Ok(())
    }
}
