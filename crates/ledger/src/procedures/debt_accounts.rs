//! Debt account procedures. Every write is scoped to the `(id, user_id)`
//! pair, so a user can never touch another user's account.

use api_types::debt_account::DebtAccount;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    entity::{
        ActiveValue::{NotSet, Set},
        prelude::*,
    },
    sea_query::Expr,
};

use crate::{
    entities::debt_accounts,
    procedures::{NonQuery, Procedure, Query},
};

#[derive(Debug)]
pub struct GetDebtAccountsForUser {
    pub user_id: Uuid,
}

impl Procedure for GetDebtAccountsForUser {
    const NAME: &'static str = "pr_GetDebtAccountsForUser";
}

impl Query for GetDebtAccountsForUser {
    type Row = DebtAccount;

    async fn query<C>(&self, conn: &C) -> Result<Vec<Self::Row>, DbErr>
    where
        C: ConnectionTrait,
    {
        let rows = debt_accounts::Entity::find()
            .filter(debt_accounts::Column::UserId.eq(self.user_id))
            .order_by_asc(debt_accounts::Column::Name)
            .order_by_asc(debt_accounts::Column::Id)
            .all(conn)
            .await?;
        Ok(rows.into_iter().map(DebtAccount::from).collect())
    }
}

/// Open a debt account. The initial and current amount owed both start at
/// `amount_owed` and the account has no payoff date yet.
#[derive(Debug)]
pub struct CreateDebtAccountForUser {
    pub user_id: Uuid,
    pub name: String,
    pub amount_owed: f64,
    pub country_currency_code: String,
    pub target_payoff_date: NaiveDate,
}

impl Procedure for CreateDebtAccountForUser {
    const NAME: &'static str = "pr_CreateDebtAccountForUser";
}

impl NonQuery for CreateDebtAccountForUser {
    async fn execute<C>(&self, conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let account = debt_accounts::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(self.user_id),
            name: Set(self.name.clone()),
            country_currency_code: Set(self.country_currency_code.clone()),
            initial_amount_owed: Set(self.amount_owed),
            current_amount_owed: Set(self.amount_owed),
            target_payoff_date: Set(self.target_payoff_date),
            actual_payoff_date: Set(None),
        };
        debt_accounts::Entity::insert(account)
            .exec_without_returning(conn)
            .await
    }
}

/// `current_amount_owed += amount`. No lower or upper bound is enforced.
#[derive(Debug)]
pub struct AddAmountToDebtAccountForUser {
    pub user_id: Uuid,
    pub debt_account_id: Uuid,
    pub amount: f64,
}

impl Procedure for AddAmountToDebtAccountForUser {
    const NAME: &'static str = "pr_AddAmountToDebtAccountForUser";
}

impl NonQuery for AddAmountToDebtAccountForUser {
    async fn execute<C>(&self, conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = debt_accounts::Entity::update_many()
            .col_expr(
                debt_accounts::Column::CurrentAmountOwed,
                Expr::col(debt_accounts::Column::CurrentAmountOwed).add(self.amount),
            )
            .filter(debt_accounts::Column::Id.eq(self.debt_account_id))
            .filter(debt_accounts::Column::UserId.eq(self.user_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}

/// `current_amount_owed -= amount`. The result may go negative.
#[derive(Debug)]
pub struct SubtractAmountFromDebtAccountForUser {
    pub user_id: Uuid,
    pub debt_account_id: Uuid,
    pub amount: f64,
}

impl Procedure for SubtractAmountFromDebtAccountForUser {
    const NAME: &'static str = "pr_SubtractAmountFromDebtAccountForUser";
}

impl NonQuery for SubtractAmountFromDebtAccountForUser {
    async fn execute<C>(&self, conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = debt_accounts::Entity::update_many()
            .col_expr(
                debt_accounts::Column::CurrentAmountOwed,
                Expr::col(debt_accounts::Column::CurrentAmountOwed).sub(self.amount),
            )
            .filter(debt_accounts::Column::Id.eq(self.debt_account_id))
            .filter(debt_accounts::Column::UserId.eq(self.user_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}

#[derive(Debug)]
pub struct DeleteDebtAccountForUser {
    pub user_id: Uuid,
    pub debt_account_id: Uuid,
}

impl Procedure for DeleteDebtAccountForUser {
    const NAME: &'static str = "pr_DeleteDebtAccountForUser";
}

impl NonQuery for DeleteDebtAccountForUser {
    async fn execute<C>(&self, conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = debt_accounts::Entity::delete_many()
            .filter(debt_accounts::Column::Id.eq(self.debt_account_id))
            .filter(debt_accounts::Column::UserId.eq(self.user_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}

/// Partial update of a debt account.
///
/// `None` leaves a column untouched. `actual_payoff_date` is nullable, so
/// `Some(None)` clears it.
#[derive(Debug, Default)]
pub struct UpdateDebtAccountForUser {
    pub user_id: Uuid,
    pub debt_account_id: Uuid,
    pub name: Option<String>,
    pub country_currency_code: Option<String>,
    pub current_amount_owed: Option<f64>,
    pub target_payoff_date: Option<NaiveDate>,
    pub actual_payoff_date: Option<Option<NaiveDate>>,
}

impl Procedure for UpdateDebtAccountForUser {
    const NAME: &'static str = "pr_UpdateDebtAccountForUser";
}

impl NonQuery for UpdateDebtAccountForUser {
    async fn execute<C>(&self, conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let changes = debt_accounts::ActiveModel {
            name: self.name.clone().map_or(NotSet, Set),
            country_currency_code: self.country_currency_code.clone().map_or(NotSet, Set),
            current_amount_owed: self.current_amount_owed.map_or(NotSet, Set),
            target_payoff_date: self.target_payoff_date.map_or(NotSet, Set),
            actual_payoff_date: self.actual_payoff_date.map_or(NotSet, Set),
            ..Default::default()
        };
        if !changes.is_changed() {
            return Ok(0);
        }

        let result = debt_accounts::Entity::update_many()
            .set(changes)
            .filter(debt_accounts::Column::Id.eq(self.debt_account_id))
            .filter(debt_accounts::Column::UserId.eq(self.user_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}
