//! Expense category procedures.
//!
//! Categories are global and unique by name. A user sees a category once a
//! link row in `user_expense_categories` exists for it.

use api_types::expense_category::ExpenseCategory;
use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, Insert, QueryFilter, QueryOrder,
    entity::{ActiveValue::Set, prelude::*},
    sea_query::OnConflict,
};

use crate::{
    entities::{expense_categories, user_expense_categories},
    procedures::{NonQuery, Procedure, Query},
};

fn insert_category(name: &str) -> Insert<expense_categories::ActiveModel> {
    let model = expense_categories::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
    };
    expense_categories::Entity::insert(model).on_conflict(
        OnConflict::column(expense_categories::Column::Name)
            .do_nothing_on([expense_categories::Column::Name])
            .to_owned(),
    )
}

fn insert_link(
    user_id: Uuid,
    expense_category_id: Uuid,
) -> Insert<user_expense_categories::ActiveModel> {
    let link = user_expense_categories::ActiveModel {
        user_id: Set(user_id),
        expense_category_id: Set(expense_category_id),
    };
    user_expense_categories::Entity::insert(link).on_conflict(
        OnConflict::columns([
            user_expense_categories::Column::UserId,
            user_expense_categories::Column::ExpenseCategoryId,
        ])
        .do_nothing_on([user_expense_categories::Column::UserId])
        .to_owned(),
    )
}

/// Return the id of the category called `name`, inserting it first when it
/// does not exist yet.
pub(crate) async fn find_or_create_category<C>(conn: &C, name: &str) -> Result<Uuid, DbErr>
where
    C: ConnectionTrait,
{
    insert_category(name).exec_without_returning(conn).await?;

    expense_categories::Entity::find()
        .filter(expense_categories::Column::Name.eq(name))
        .one(conn)
        .await?
        .map(|category| category.id)
        .ok_or_else(|| DbErr::RecordNotFound(format!("expense category \"{name}\"")))
}

/// Link a category to a user. Linking twice is a no-op.
pub(crate) async fn link_category_to_user<C>(
    conn: &C,
    user_id: Uuid,
    expense_category_id: Uuid,
) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    insert_link(user_id, expense_category_id)
        .exec_without_returning(conn)
        .await
}

/// Every category, whoever uses it.
#[derive(Debug, Default)]
pub struct GetExpenseCategories;

impl Procedure for GetExpenseCategories {
    const NAME: &'static str = "pr_GetExpenseCategories";
}

impl Query for GetExpenseCategories {
    type Row = ExpenseCategory;

    async fn query<C>(&self, conn: &C) -> Result<Vec<Self::Row>, DbErr>
    where
        C: ConnectionTrait,
    {
        let rows = expense_categories::Entity::find()
            .order_by_asc(expense_categories::Column::Name)
            .order_by_asc(expense_categories::Column::Id)
            .all(conn)
            .await?;
        Ok(rows.into_iter().map(ExpenseCategory::from).collect())
    }
}

/// Categories linked to one user.
#[derive(Debug)]
pub struct GetExpenseCategoriesForUser {
    pub user_id: Uuid,
}

impl Procedure for GetExpenseCategoriesForUser {
    const NAME: &'static str = "pr_GetExpenseCategoriesForUser";
}

impl Query for GetExpenseCategoriesForUser {
    type Row = ExpenseCategory;

    async fn query<C>(&self, conn: &C) -> Result<Vec<Self::Row>, DbErr>
    where
        C: ConnectionTrait,
    {
        let rows = expense_categories::Entity::find()
            .inner_join(user_expense_categories::Entity)
            .filter(user_expense_categories::Column::UserId.eq(self.user_id))
            .order_by_asc(expense_categories::Column::Name)
            .order_by_asc(expense_categories::Column::Id)
            .all(conn)
            .await?;
        Ok(rows.into_iter().map(ExpenseCategory::from).collect())
    }
}

#[derive(Debug)]
pub struct CreateExpenseCategoryForUser {
    pub user_id: Uuid,
    pub expense_category_name: String,
}

impl Procedure for CreateExpenseCategoryForUser {
    const NAME: &'static str = "pr_CreateExpenseCategoryForUser";
}

impl NonQuery for CreateExpenseCategoryForUser {
    async fn execute<C>(&self, conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let category_id = find_or_create_category(conn, &self.expense_category_name).await?;
        link_category_to_user(conn, self.user_id, category_id).await
    }
}

/// Unlink a category from a user. The category itself stays, other users
/// and existing expenses may still refer to it.
#[derive(Debug)]
pub struct DeleteExpenseCategoryForUser {
    pub user_id: Uuid,
    pub expense_category_id: Uuid,
}

impl Procedure for DeleteExpenseCategoryForUser {
    const NAME: &'static str = "pr_DeleteExpenseCategoryForUser";
}

impl NonQuery for DeleteExpenseCategoryForUser {
    async fn execute<C>(&self, conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = user_expense_categories::Entity::delete_many()
            .filter(user_expense_categories::Column::UserId.eq(self.user_id))
            .filter(
                user_expense_categories::Column::ExpenseCategoryId.eq(self.expense_category_id),
            )
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}
