use api_types::currency::Currency;
use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, Insert, QueryOrder,
    entity::{ActiveValue::Set, prelude::*},
    sea_query::OnConflict,
};

use crate::{
    entities::currencies,
    procedures::{NonQuery, Procedure, Query},
};

#[derive(Debug, Default)]
pub struct GetCurrencies;

impl Procedure for GetCurrencies {
    const NAME: &'static str = "pr_GetCurrencies";
}

impl Query for GetCurrencies {
    type Row = Currency;

    async fn query<C>(&self, conn: &C) -> Result<Vec<Self::Row>, DbErr>
    where
        C: ConnectionTrait,
    {
        let rows = currencies::Entity::find()
            .order_by_asc(currencies::Column::Name)
            .order_by_asc(currencies::Column::Id)
            .all(conn)
            .await?;
        Ok(rows.into_iter().map(Currency::from).collect())
    }
}

/// Insert a currency under a fresh id. A currency whose code already exists
/// is left as it is and the procedure reports zero rows.
#[derive(Debug)]
pub struct CreateCurrency {
    pub country_currency_code: String,
    pub name: String,
    pub country: Option<String>,
    pub rand_exchange_rate: f64,
}

impl CreateCurrency {
    fn insert(&self) -> Insert<currencies::ActiveModel> {
        let currency = currencies::ActiveModel {
            id: Set(Uuid::new_v4()),
            country_currency_code: Set(self.country_currency_code.clone()),
            name: Set(self.name.clone()),
            country: Set(self.country.clone()),
            rand_exchange_rate: Set(self.rand_exchange_rate),
        };
        currencies::Entity::insert(currency).on_conflict(
            OnConflict::column(currencies::Column::CountryCurrencyCode)
                .do_nothing_on([currencies::Column::CountryCurrencyCode])
                .to_owned(),
        )
    }
}

impl Procedure for CreateCurrency {
    const NAME: &'static str = "pr_CreateCurrency";
}

impl NonQuery for CreateCurrency {
    async fn execute<C>(&self, conn: &C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        self.insert().exec_without_returning(conn).await
    }
}
