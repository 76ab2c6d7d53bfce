//! Savings account procedures, scoped to `(id, user_id)` like the debt
//! account ones.

use api_types::savings_account::SavingsAccount;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    entity::{
        ActiveValue::{NotSet, Set},
        prelude::*,
    },
    sea_query::Expr,
};

use crate::{
    entities::savings_accounts,
    procedures::{NonQuery, Procedure, Query},
};

#[derive(Debug)]
pub struct GetSavingsAccountsForUser {
    pub user_id: Uuid,
}

impl Procedure for GetSavingsAccountsForUser {
    const NAME: &'static str = "pr_GetSavingsAccountsForUser";
}

impl Query for GetSavingsAccountsForUser {
    type Row = SavingsAccount;

    async fn query<C>(&self, conn: &C) -> Result<Vec<Self::Row>, DbErr>
    where
        C: ConnectionTrait,
    {
        let rows = savings_accounts::Entity::find()
            .filter(savings_accounts::Column::UserId.eq(self.user_id))
            .order_by_asc(savings_accounts::Column::Name)
            .order_by_asc(savings_accounts::Column::Id)
            .all(conn)
            .await?;
        Ok(rows.into_iter().map(SavingsAccount::from).collect())
    }
}

/// Open a savings account holding `savings_value`.
#[derive(Debug)]
pub struct CreateSavingsAccountForUser {
    pub user_id: Uuid,
    pub name: String,
    pub savings_value: f64,
    pub savings_target: Option<f64>,
    pub country_currency_code: String,
}

impl Procedure for CreateSavingsAccountForUser {
    const NAME: &'static str = "pr_CreateSavingsAccountForUser";
}

impl NonQuery for CreateSavingsAccountForUser {
    async fn execute<C>(&self, conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let account = savings_accounts::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(self.user_id),
            name: Set(self.name.clone()),
            country_currency_code: Set(self.country_currency_code.clone()),
            initial_savings_value: Set(self.savings_value),
            current_savings_value: Set(self.savings_value),
            savings_target: Set(self.savings_target),
        };
        savings_accounts::Entity::insert(account)
            .exec_without_returning(conn)
            .await
    }
}

#[derive(Debug)]
pub struct AddAmountToSavingsAccountForUser {
    pub user_id: Uuid,
    pub savings_account_id: Uuid,
    pub amount: f64,
}

impl Procedure for AddAmountToSavingsAccountForUser {
    const NAME: &'static str = "pr_AddAmountToSavingsAccountForUser";
}

impl NonQuery for AddAmountToSavingsAccountForUser {
    async fn execute<C>(&self, conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = savings_accounts::Entity::update_many()
            .col_expr(
                savings_accounts::Column::CurrentSavingsValue,
                Expr::col(savings_accounts::Column::CurrentSavingsValue).add(self.amount),
            )
            .filter(savings_accounts::Column::Id.eq(self.savings_account_id))
            .filter(savings_accounts::Column::UserId.eq(self.user_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}

#[derive(Debug)]
pub struct SubtractAmountFromSavingsAccountForUser {
    pub user_id: Uuid,
    pub savings_account_id: Uuid,
    pub amount: f64,
}

impl Procedure for SubtractAmountFromSavingsAccountForUser {
    const NAME: &'static str = "pr_SubtractAmountFromSavingsAccountForUser";
}

impl NonQuery for SubtractAmountFromSavingsAccountForUser {
    async fn execute<C>(&self, conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = savings_accounts::Entity::update_many()
            .col_expr(
                savings_accounts::Column::CurrentSavingsValue,
                Expr::col(savings_accounts::Column::CurrentSavingsValue).sub(self.amount),
            )
            .filter(savings_accounts::Column::Id.eq(self.savings_account_id))
            .filter(savings_accounts::Column::UserId.eq(self.user_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}

#[derive(Debug)]
pub struct DeleteSavingsAccountForUser {
    pub user_id: Uuid,
    pub savings_account_id: Uuid,
}

impl Procedure for DeleteSavingsAccountForUser {
    const NAME: &'static str = "pr_DeleteSavingsAccountForUser";
}

impl NonQuery for DeleteSavingsAccountForUser {
    async fn execute<C>(&self, conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = savings_accounts::Entity::delete_many()
            .filter(savings_accounts::Column::Id.eq(self.savings_account_id))
            .filter(savings_accounts::Column::UserId.eq(self.user_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}

/// Partial update of a savings account. `savings_target` is nullable:
/// `Some(None)` clears the target.
#[derive(Debug, Default)]
pub struct UpdateSavingsAccountForUser {
    pub user_id: Uuid,
    pub savings_account_id: Uuid,
    pub name: Option<String>,
    pub country_currency_code: Option<String>,
    pub current_savings_value: Option<f64>,
    pub savings_target: Option<Option<f64>>,
}

impl Procedure for UpdateSavingsAccountForUser {
    const NAME: &'static str = "pr_UpdateSavingsAccountForUser";
}

impl NonQuery for UpdateSavingsAccountForUser {
    async fn execute<C>(&self, conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let changes = savings_accounts::ActiveModel {
            name: self.name.clone().map_or(NotSet, Set),
            country_currency_code: self.country_currency_code.clone().map_or(NotSet, Set),
            current_savings_value: self.current_savings_value.map_or(NotSet, Set),
            savings_target: self.savings_target.map_or(NotSet, Set),
            ..Default::default()
        };
        if !changes.is_changed() {
            return Ok(0);
        }

        let result = savings_accounts::Entity::update_many()
            .set(changes)
            .filter(savings_accounts::Column::Id.eq(self.savings_account_id))
            .filter(savings_accounts::Column::UserId.eq(self.user_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}
