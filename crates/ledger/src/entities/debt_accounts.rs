use api_types::debt_account::DebtAccount;
use chrono::NaiveDate;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "debt_accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub country_currency_code: String,
    pub initial_amount_owed: f64,
    pub current_amount_owed: f64,
    pub target_payoff_date: NaiveDate,
    pub actual_payoff_date: Option<NaiveDate>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for DebtAccount {
    fn from(value: Model) -> Self {
        Self {
            debt_account_id: value.id,
            user_id: value.user_id,
            name: value.name,
            country_currency_code: value.country_currency_code,
            initial_amount_owed: value.initial_amount_owed,
            current_amount_owed: value.current_amount_owed,
            target_payoff_date: value.target_payoff_date,
            actual_payoff_date: value.actual_payoff_date,
        }
    }
}
