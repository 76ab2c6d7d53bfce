//! Budget and expense procedures.

use api_types::budget::Expense;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, Insert, QueryFilter, QueryOrder,
    entity::{
        ActiveValue::{NotSet, Set},
        prelude::*,
    },
    sea_query::OnConflict,
};

use crate::{
    entities::{budgets, expenses},
    procedures::{
        NonQuery, Procedure, Query,
        expense_categories::{find_or_create_category, link_category_to_user},
    },
};

fn insert_budget(user_id: Uuid) -> Insert<budgets::ActiveModel> {
    let model = budgets::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
    };
    budgets::Entity::insert(model).on_conflict(
        OnConflict::column(budgets::Column::UserId)
            .do_nothing_on([budgets::Column::UserId])
            .to_owned(),
    )
}

/// Return the id of the user's budget, creating the budget on first use.
async fn find_or_create_budget<C>(conn: &C, user_id: Uuid) -> Result<Uuid, DbErr>
where
    C: ConnectionTrait,
{
    insert_budget(user_id).exec_without_returning(conn).await?;

    budgets::Entity::find()
        .filter(budgets::Column::UserId.eq(user_id))
        .one(conn)
        .await?
        .map(|budget| budget.id)
        .ok_or_else(|| DbErr::RecordNotFound(format!("budget for user {user_id}")))
}

/// All expenses of the user's budget.
#[derive(Debug)]
pub struct GetBudgetForUser {
    pub user_id: Uuid,
}

impl Procedure for GetBudgetForUser {
    const NAME: &'static str = "pr_GetBudgetForUser";
}

impl Query for GetBudgetForUser {
    type Row = Expense;

    async fn query<C>(&self, conn: &C) -> Result<Vec<Self::Row>, DbErr>
    where
        C: ConnectionTrait,
    {
        let rows = expenses::Entity::find()
            .filter(expenses::Column::UserId.eq(self.user_id))
            .order_by_asc(expenses::Column::DisplayName)
            .order_by_asc(expenses::Column::Id)
            .all(conn)
            .await?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }
}

/// Add an expense to the user's budget.
///
/// The budget, the category and the user's link to the category are created
/// when missing. The expense is displayed under the category name.
#[derive(Debug)]
pub struct CreateExpenseForUser {
    pub user_id: Uuid,
    pub expense_category_name: String,
    pub country_currency_code: String,
    pub value: f64,
}

impl Procedure for CreateExpenseForUser {
    const NAME: &'static str = "pr_CreateExpenseForUser";
}

impl NonQuery for CreateExpenseForUser {
    async fn execute<C>(&self, conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let budget_id = find_or_create_budget(conn, self.user_id).await?;
        let category_id = find_or_create_category(conn, &self.expense_category_name).await?;
        link_category_to_user(conn, self.user_id, category_id).await?;

        let expense = expenses::ActiveModel {
            id: Set(Uuid::new_v4()),
            budget_id: Set(budget_id),
            user_id: Set(self.user_id),
            expense_category_id: Set(category_id),
            display_name: Set(self.expense_category_name.clone()),
            country_currency_code: Set(self.country_currency_code.clone()),
            value: Set(self.value),
        };
        expenses::Entity::insert(expense)
            .exec_without_returning(conn)
            .await
    }
}

#[derive(Debug)]
pub struct DeleteExpenseForUser {
    pub user_id: Uuid,
    pub expense_id: Uuid,
}

impl Procedure for DeleteExpenseForUser {
    const NAME: &'static str = "pr_DeleteExpenseForUser";
}

impl NonQuery for DeleteExpenseForUser {
    async fn execute<C>(&self, conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = expenses::Entity::delete_many()
            .filter(expenses::Column::Id.eq(self.expense_id))
            .filter(expenses::Column::UserId.eq(self.user_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}

/// Overwrite the supplied expense fields, leaving `None` fields untouched.
#[derive(Debug, Default)]
pub struct UpdateExpenseForUser {
    pub user_id: Uuid,
    pub expense_id: Uuid,
    pub display_name: Option<String>,
    pub country_currency_code: Option<String>,
    pub value: Option<f64>,
}

impl Procedure for UpdateExpenseForUser {
    const NAME: &'static str = "pr_UpdateExpenseForUser";
}

impl NonQuery for UpdateExpenseForUser {
    async fn execute<C>(&self, conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let changes = expenses::ActiveModel {
            display_name: self.display_name.clone().map_or(NotSet, Set),
            country_currency_code: self.country_currency_code.clone().map_or(NotSet, Set),
            value: self.value.map_or(NotSet, Set),
            ..Default::default()
        };
        if !changes.is_changed() {
            return Ok(0);
        }

        let result = expenses::Entity::update_many()
            .set(changes)
            .filter(expenses::Column::Id.eq(self.expense_id))
            .filter(expenses::Column::UserId.eq(self.user_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}
