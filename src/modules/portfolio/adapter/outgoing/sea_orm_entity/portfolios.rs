use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};

use crate::auth::application::domain::entities::UserId;
use crate::modules::portfolio::application::ports::outgoing::PortfolioRecord;
use crate::modules::portfolio::domain::PortfolioStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub user_id: Uuid,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub template_id: Option<Uuid>,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,

    #[sea_orm(column_type = "Text", string_len = 180)]
    pub slug: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub profile_data: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub design_settings: Json,

    // 'draft' | 'published'
    pub status: String,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub published_at: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> Result<PortfolioRecord, serde_json::Error> {
        Ok(PortfolioRecord {
            id: self.id,
            owner: UserId::from(self.user_id),
            title: self.title.clone(),
            slug: self.slug.clone(),
            template_id: self.template_id,
            profile: serde_json::from_value(self.profile_data.clone())?,
            design: serde_json::from_value(self.design_settings.clone())?,
            status: PortfolioStatus::parse(&self.status),
            published_at: self.published_at.map(Into::into),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::user_profiles::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::user_profiles::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    UserProfiles,

    #[sea_orm(
        belongs_to = "crate::modules::template::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::TemplateId",
        to = "crate::modules::template::adapter::outgoing::sea_orm_entity::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Templates,

    #[sea_orm(has_many = "super::portfolio_sections::Entity")]
    Sections,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::user_profiles::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::UserProfiles.def()
    }
}

impl Related<crate::modules::template::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Templates.def()
    }
}

impl Related<super::portfolio_sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sections.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(slug) = &self.slug {
            self.slug = Set(slug.trim().to_lowercase());
        }

        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
