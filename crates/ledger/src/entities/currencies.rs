//! Currency reference table.

use api_types::currency::Currency;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "currencies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub country_currency_code: String,
    pub name: String,
    pub country: Option<String>,
    pub rand_exchange_rate: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Currency {
    fn from(value: Model) -> Self {
        Self {
            currency_id: value.id,
            country_currency_code: value.country_currency_code,
            name: value.name,
            country: value.country,
            rand_exchange_rate: value.rand_exchange_rate,
        }
    }
}
