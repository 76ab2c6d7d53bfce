//! Budget schema.
//!
//! - `budgets`: one implicit budget per user
//! - `expense_categories`: global category names
//! - `user_expense_categories`: which categories a user has linked
//! - `expenses`: budget lines

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Budgets {
    Table,
    Id,
    UserId,
}

#[derive(Iden)]
enum ExpenseCategories {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum UserExpenseCategories {
    Table,
    UserId,
    ExpenseCategoryId,
}

#[derive(Iden)]
enum Expenses {
    Table,
    Id,
    BudgetId,
    UserId,
    ExpenseCategoryId,
    DisplayName,
    CountryCurrencyCode,
    Value,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Budgets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Budgets::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Budgets::UserId).uuid().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-budgets-user_id-unique")
                    .table(Budgets::Table)
                    .col(Budgets::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExpenseCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExpenseCategories::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ExpenseCategories::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-expense_categories-name-unique")
                    .table(ExpenseCategories::Table)
                    .col(ExpenseCategories::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserExpenseCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserExpenseCategories::UserId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserExpenseCategories::ExpenseCategoryId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserExpenseCategories::UserId)
                            .col(UserExpenseCategories::ExpenseCategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_expense_categories-expense_category_id")
                            .from(
                                UserExpenseCategories::Table,
                                UserExpenseCategories::ExpenseCategoryId,
                            )
                            .to(ExpenseCategories::Table, ExpenseCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Expenses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Expenses::BudgetId).uuid().not_null())
                    .col(ColumnDef::new(Expenses::UserId).uuid().not_null())
                    .col(ColumnDef::new(Expenses::ExpenseCategoryId).uuid().not_null())
                    .col(ColumnDef::new(Expenses::DisplayName).string().not_null())
                    .col(
                        ColumnDef::new(Expenses::CountryCurrencyCode)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Expenses::Value).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-expenses-budget_id")
                            .from(Expenses::Table, Expenses::BudgetId)
                            .to(Budgets::Table, Budgets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-expenses-expense_category_id")
                            .from(Expenses::Table, Expenses::ExpenseCategoryId)
                            .to(ExpenseCategories::Table, ExpenseCategories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-expenses-user_id")
                    .table(Expenses::Table)
                    .col(Expenses::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserExpenseCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExpenseCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Budgets::Table).to_owned())
            .await?;
        Ok(())
    }
}
