use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
};

use models::ingredient;

use crate::data::IngredientDto;
use crate::errors::ServiceError;

#[async_trait]
pub trait IngredientRepository: Send + Sync {
    async fn find_by_recipe(&self, recipe_id: i64)
        -> Result<Vec<ingredient::Model>, ServiceError>;
    async fn find_by_recipe_and_id(
        &self,
        recipe_id: i64,
        id: i64,
    ) -> Result<Option<ingredient::Model>, ServiceError>;
    async fn insert(&self, dto: &IngredientDto) -> Result<ingredient::Model, ServiceError>;
    /// Updates the ingredient with `dto.id` in place; scoped to `dto.recipe_id`.
    async fn update(&self, dto: &IngredientDto) -> Result<ingredient::Model, ServiceError>;
    /// Returns whether a row was actually removed.
    async fn delete(&self, recipe_id: i64, id: i64) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmIngredientRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl IngredientRepository for SeaOrmIngredientRepository {
    async fn find_by_recipe(
        &self,
        recipe_id: i64,
    ) -> Result<Vec<ingredient::Model>, ServiceError> {
        ingredient::Entity::find()
            .filter(ingredient::Column::RecipeId.eq(recipe_id))
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_recipe_and_id(
        &self,
        recipe_id: i64,
        id: i64,
    ) -> Result<Option<ingredient::Model>, ServiceError> {
        ingredient::Entity::find_by_id(id)
            .filter(ingredient::Column::RecipeId.eq(recipe_id))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn insert(&self, dto: &IngredientDto) -> Result<ingredient::Model, ServiceError> {
        let am = ingredient::ActiveModel {
            id: NotSet,
            recipe_id: Set(dto.recipe_id),
            description: Set(dto.description.clone()),
            amount: Set(dto.amount),
            uom_id: Set(dto.uom_id),
        };
        am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn update(&self, dto: &IngredientDto) -> Result<ingredient::Model, ServiceError> {
        let id = dto.require_id()?;
        let mut am: ingredient::ActiveModel = self
            .find_by_recipe_and_id(dto.recipe_id, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("ingredient"))?
            .into();
        am.description = Set(dto.description.clone());
        am.amount = Set(dto.amount);
        am.uom_id = Set(dto.uom_id);
        am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete(&self, recipe_id: i64, id: i64) -> Result<bool, ServiceError> {
        let res = ingredient::Entity::delete_many()
            .filter(ingredient::Column::Id.eq(id))
            .filter(ingredient::Column::RecipeId.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}
