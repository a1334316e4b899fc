use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::template::application::ports::outgoing::TemplateView;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_templates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub category: String,

    pub is_premium: bool,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_view(&self) -> TemplateView {
        TemplateView {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            is_premium: self.is_premium,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolios::Entity"
    )]
    Portfolios,
}

impl Related<crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolios::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Portfolios.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use sea_orm::ActiveValue::{self, Set};

        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(name.trim().to_string());
        }

        if let ActiveValue::Set(category) = &self.category {
            self.category = Set(category.trim().to_lowercase());
        }

        Ok(self)
    }
}
