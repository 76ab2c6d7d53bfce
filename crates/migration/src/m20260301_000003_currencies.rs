//! Global currency reference table, keyed by ISO 4217 code.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Currencies {
    Table,
    Id,
    CountryCurrencyCode,
    Name,
    Country,
    RandExchangeRate,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Currencies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Currencies::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Currencies::CountryCurrencyCode)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Currencies::Name).string().not_null())
                    .col(ColumnDef::new(Currencies::Country).string())
                    .col(
                        ColumnDef::new(Currencies::RandExchangeRate)
                            .double()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-currencies-country_currency_code-unique")
                    .table(Currencies::Table)
                    .col(Currencies::CountryCurrencyCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Currencies::Table).to_owned())
            .await?;
        Ok(())
    }
}
