use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Set};

use models::recipe;

use crate::data::RecipeDto;
use crate::errors::ServiceError;

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<recipe::Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<recipe::Model>, ServiceError>;
    async fn insert(&self, dto: &RecipeDto) -> Result<recipe::Model, ServiceError>;
    async fn update(&self, id: i64, dto: &RecipeDto) -> Result<recipe::Model, ServiceError>;
    /// Returns whether a row was actually removed.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
    async fn set_image(&self, id: i64, bytes: Vec<u8>) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmRecipeRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl RecipeRepository for SeaOrmRecipeRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<recipe::Model>, ServiceError> {
        recipe::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<recipe::Model>, ServiceError> {
        recipe::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn insert(&self, dto: &RecipeDto) -> Result<recipe::Model, ServiceError> {
        let now = Utc::now().into();
        let am = recipe::ActiveModel {
            id: NotSet,
            description: Set(dto.description.clone()),
            prep_time: Set(dto.prep_time),
            cook_time: Set(dto.cook_time),
            servings: Set(dto.servings),
            source: Set(dto.source.clone()),
            url: Set(dto.url.clone()),
            directions: Set(dto.directions.clone()),
            image: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };
        am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn update(&self, id: i64, dto: &RecipeDto) -> Result<recipe::Model, ServiceError> {
        let mut am: recipe::ActiveModel = recipe::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .ok_or_else(|| ServiceError::not_found("recipe"))?
            .into();
        // Image and created_at are never touched by form saves
        am.description = Set(dto.description.clone());
        am.prep_time = Set(dto.prep_time);
        am.cook_time = Set(dto.cook_time);
        am.servings = Set(dto.servings);
        am.source = Set(dto.source.clone());
        am.url = Set(dto.url.clone());
        am.directions = Set(dto.directions.clone());
        am.updated_at = Set(Utc::now().into());
        am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let res = recipe::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }

    async fn set_image(&self, id: i64, bytes: Vec<u8>) -> Result<(), ServiceError> {
        let mut am: recipe::ActiveModel = recipe::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .ok_or_else(|| ServiceError::not_found("recipe"))?
            .into();
        am.image = Set(Some(bytes));
        am.updated_at = Set(Utc::now().into());
        am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }
}
