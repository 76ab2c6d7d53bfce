use api_types::savings_account::SavingsAccount;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "savings_accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub country_currency_code: String,
    pub initial_savings_value: f64,
    pub current_savings_value: f64,
    pub savings_target: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SavingsAccount {
    fn from(value: Model) -> Self {
        Self {
            savings_account_id: value.id,
            user_id: value.user_id,
            name: value.name,
            country_currency_code: value.country_currency_code,
            initial_savings_value: value.initial_savings_value,
            current_savings_value: value.current_savings_value,
            savings_target: value.savings_target,
        }
    }
}
