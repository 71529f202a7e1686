use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::home::application::ports::outgoing::HomePage;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "home_pages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    /// Fixed well-known key; a unique index makes concurrent first reads
    /// collapse onto one row.
    #[sea_orm(unique)]
    pub key: String,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub tagline: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub resume_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub photo_url: Option<String>,

    pub available_for_opportunities: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> HomePage {
        HomePage {
            name: self.name.clone(),
            tagline: self.tagline.clone(),
            resume_url: self.resume_url.clone(),
            photo_url: self.photo_url.clone(),
            available_for_opportunities: self.available_for_opportunities,
        }
    }
}
