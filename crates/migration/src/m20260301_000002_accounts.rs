//! Debt and savings accounts.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum DebtAccounts {
    Table,
    Id,
    UserId,
    Name,
    CountryCurrencyCode,
    InitialAmountOwed,
    CurrentAmountOwed,
    TargetPayoffDate,
    ActualPayoffDate,
}

#[derive(Iden)]
enum SavingsAccounts {
    Table,
    Id,
    UserId,
    Name,
    CountryCurrencyCode,
    InitialSavingsValue,
    CurrentSavingsValue,
    SavingsTarget,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DebtAccounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DebtAccounts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DebtAccounts::UserId).uuid().not_null())
                    .col(ColumnDef::new(DebtAccounts::Name).string().not_null())
                    .col(
                        ColumnDef::new(DebtAccounts::CountryCurrencyCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DebtAccounts::InitialAmountOwed)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DebtAccounts::CurrentAmountOwed)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DebtAccounts::TargetPayoffDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DebtAccounts::ActualPayoffDate).date())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-debt_accounts-user_id")
                    .table(DebtAccounts::Table)
                    .col(DebtAccounts::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SavingsAccounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SavingsAccounts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SavingsAccounts::UserId).uuid().not_null())
                    .col(ColumnDef::new(SavingsAccounts::Name).string().not_null())
                    .col(
                        ColumnDef::new(SavingsAccounts::CountryCurrencyCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SavingsAccounts::InitialSavingsValue)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SavingsAccounts::CurrentSavingsValue)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SavingsAccounts::SavingsTarget).double())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-savings_accounts-user_id")
                    .table(SavingsAccounts::Table)
                    .col(SavingsAccounts::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SavingsAccounts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DebtAccounts::Table).to_owned())
            .await?;
        Ok(())
    }
}
