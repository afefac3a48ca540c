use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::ingredient;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipe")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub description: String,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
    pub source: Option<String>,
    pub url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub directions: Option<String>,
    // Raw upload payload; written only by the image path
    #[sea_orm(column_type = "Blob", nullable)]
    #[serde(skip_serializing)]
    pub image: Option<Vec<u8>>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Ingredient,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Ingredient => Entity::has_many(ingredient::Entity).into(),
        }
    }
}

impl Related<ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingredient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_description(description: &str) -> Result<(), ModelError> {
    if description.trim().is_empty() {
        return Err(ModelError::Validation("description must not be blank".into()));
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), ModelError> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ModelError::Validation("url must start with http(s)".into()));
    }
    Ok(())
}

pub fn validate_minutes(field: &str, value: i32) -> Result<(), ModelError> {
    if value < 0 {
        return Err(ModelError::Validation(format!("{} must not be negative", field)));
    }
    Ok(())
}
