use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{recipe, unit_of_measure};

/// Owned by exactly one recipe through the `recipe_id` foreign key; the
/// unit-of-measure reference is optional.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ingredient")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub recipe_id: i64,
    pub description: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub amount: Option<f64>,
    pub uom_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Recipe,
    UnitOfMeasure,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Recipe => Entity::belongs_to(recipe::Entity)
                .from(Column::RecipeId)
                .to(recipe::Column::Id)
                .into(),
            Relation::UnitOfMeasure => Entity::belongs_to(unit_of_measure::Entity)
                .from(Column::UomId)
                .to(unit_of_measure::Column::Id)
                .into(),
        }
    }
}

impl Related<recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipe.def()
    }
}

impl Related<unit_of_measure::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UnitOfMeasure.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_description(description: &str) -> Result<(), ModelError> {
    if description.trim().is_empty() {
        return Err(ModelError::Validation("description must not be blank".into()));
    }
    Ok(())
}

pub fn validate_amount(amount: f64) -> Result<(), ModelError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ModelError::Validation("amount must not be negative".into()));
    }
    Ok(())
}
