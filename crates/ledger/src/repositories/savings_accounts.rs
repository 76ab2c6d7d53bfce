use api_types::savings_account::{SavingsAccount, SavingsAccountNew, SavingsAccountUpdate};
use uuid::Uuid;

use crate::{
    ConnectionProvider, ResultLedger,
    procedures::savings_accounts::{
        AddAmountToSavingsAccountForUser, CreateSavingsAccountForUser,
        DeleteSavingsAccountForUser, GetSavingsAccountsForUser,
        SubtractAmountFromSavingsAccountForUser, UpdateSavingsAccountForUser,
    },
};

use super::{execute, query};

#[derive(Clone, Debug)]
pub struct SavingsAccountRepository {
    provider: ConnectionProvider,
}

impl SavingsAccountRepository {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }

    pub async fn get_savings_accounts_for_user(
        &self,
        user_id: Uuid,
    ) -> ResultLedger<Vec<SavingsAccount>> {
        query(&self.provider, &GetSavingsAccountsForUser { user_id }).await
    }

    pub async fn create_savings_account_for_user(
        &self,
        user_id: Uuid,
        account: SavingsAccountNew,
    ) -> ResultLedger<u64> {
        let procedure = CreateSavingsAccountForUser {
            user_id,
            name: account.name,
            savings_value: account.savings_value,
            savings_target: account.savings_target,
            country_currency_code: account.country_currency_code,
        };
        execute(&self.provider, &procedure).await
    }

    pub async fn add_amount_to_savings_account_for_user(
        &self,
        user_id: Uuid,
        savings_account_id: Uuid,
        amount: f64,
    ) -> ResultLedger<u64> {
        let procedure = AddAmountToSavingsAccountForUser {
            user_id,
            savings_account_id,
            amount,
        };
        execute(&self.provider, &procedure).await
    }

    pub async fn subtract_amount_from_savings_account_for_user(
        &self,
        user_id: Uuid,
        savings_account_id: Uuid,
        amount: f64,
    ) -> ResultLedger<u64> {
        let procedure = SubtractAmountFromSavingsAccountForUser {
            user_id,
            savings_account_id,
            amount,
        };
        execute(&self.provider, &procedure).await
    }

    pub async fn delete_savings_account_for_user(
        &self,
        user_id: Uuid,
        savings_account_id: Uuid,
    ) -> ResultLedger<u64> {
        let procedure = DeleteSavingsAccountForUser {
            user_id,
            savings_account_id,
        };
        execute(&self.provider, &procedure).await
    }

    /// `currentSavingsAmount` writes `current_savings_value` and
    /// `targetSavingsAmount` writes `savings_target`.
    pub async fn update_savings_account_for_user(
        &self,
        user_id: Uuid,
        savings_account_id: Uuid,
        update: SavingsAccountUpdate,
    ) -> ResultLedger<u64> {
        let procedure = UpdateSavingsAccountForUser {
            user_id,
            savings_account_id,
            name: update.name,
            country_currency_code: update.country_currency_code,
            current_savings_value: update.current_savings_amount,
            savings_target: update.target_savings_amount.into_update(),
        };
        execute(&self.provider, &procedure).await
    }
}
