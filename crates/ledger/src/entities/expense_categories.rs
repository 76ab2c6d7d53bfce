//! Global expense categories. Users link to them through
//! [`user_expense_categories`](super::user_expense_categories).

use api_types::expense_category::ExpenseCategory;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "expense_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_expense_categories::Entity")]
    UserLinks,
    #[sea_orm(has_many = "super::expenses::Entity")]
    Expenses,
}

impl Related<super::user_expense_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserLinks.def()
    }
}

impl Related<super::expenses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ExpenseCategory {
    fn from(value: Model) -> Self {
        Self {
            expense_category_id: value.id,
            expense_category_name: value.name,
        }
    }
}
