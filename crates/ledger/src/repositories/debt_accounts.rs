use api_types::debt_account::{DebtAccount, DebtAccountNew, DebtAccountUpdate};
use uuid::Uuid;

use crate::{
    ConnectionProvider, ResultLedger,
    procedures::debt_accounts::{
        AddAmountToDebtAccountForUser, CreateDebtAccountForUser, DeleteDebtAccountForUser,
        GetDebtAccountsForUser, SubtractAmountFromDebtAccountForUser, UpdateDebtAccountForUser,
    },
};

use super::{execute, query};

#[derive(Clone, Debug)]
pub struct DebtAccountRepository {
    provider: ConnectionProvider,
}

impl DebtAccountRepository {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }

    pub async fn get_debt_accounts_for_user(
        &self,
        user_id: Uuid,
    ) -> ResultLedger<Vec<DebtAccount>> {
        query(&self.provider, &GetDebtAccountsForUser { user_id }).await
    }

    pub async fn create_debt_account_for_user(
        &self,
        user_id: Uuid,
        account: DebtAccountNew,
    ) -> ResultLedger<u64> {
        let procedure = CreateDebtAccountForUser {
            user_id,
            name: account.name,
            amount_owed: account.amount_owed,
            country_currency_code: account.country_currency_code,
            target_payoff_date: account.target_payoff_date,
        };
        execute(&self.provider, &procedure).await
    }

    pub async fn add_amount_to_debt_account_for_user(
        &self,
        user_id: Uuid,
        debt_account_id: Uuid,
        amount: f64,
    ) -> ResultLedger<u64> {
        let procedure = AddAmountToDebtAccountForUser {
            user_id,
            debt_account_id,
            amount,
        };
        execute(&self.provider, &procedure).await
    }

    pub async fn subtract_amount_from_debt_account_for_user(
        &self,
        user_id: Uuid,
        debt_account_id: Uuid,
        amount: f64,
    ) -> ResultLedger<u64> {
        let procedure = SubtractAmountFromDebtAccountForUser {
            user_id,
            debt_account_id,
            amount,
        };
        execute(&self.provider, &procedure).await
    }

    pub async fn delete_debt_account_for_user(
        &self,
        user_id: Uuid,
        debt_account_id: Uuid,
    ) -> ResultLedger<u64> {
        let procedure = DeleteDebtAccountForUser {
            user_id,
            debt_account_id,
        };
        execute(&self.provider, &procedure).await
    }

    pub async fn update_debt_account_for_user(
        &self,
        user_id: Uuid,
        debt_account_id: Uuid,
        update: DebtAccountUpdate,
    ) -> ResultLedger<u64> {
        let procedure = UpdateDebtAccountForUser {
            user_id,
            debt_account_id,
            name: update.name,
            country_currency_code: update.country_currency_code,
            current_amount_owed: update.current_amount_owed,
            target_payoff_date: update.target_payoff_date,
            actual_payoff_date: update.actual_payoff_date.into_update(),
        };
        execute(&self.provider, &procedure).await
    }
}
