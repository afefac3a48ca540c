use std::sync::Arc;

use tracing::{info, instrument};

use models::recipe;

use crate::data::RecipeDto;
use crate::errors::ServiceError;
use crate::recipe::repository::RecipeRepository;

/// Application service encapsulating recipe business rules.
///
/// Uses `Arc<dyn RecipeRepository>` so the same state type serves the
/// SeaORM-backed wiring and in-memory test doubles.
pub struct RecipeService {
    repo: Arc<dyn RecipeRepository>,
}

impl RecipeService {
    pub fn new(repo: Arc<dyn RecipeRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<recipe::Model, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("recipe"))
    }

    pub async fn get_all(&self) -> Result<Vec<recipe::Model>, ServiceError> {
        self.repo.find_all().await
    }

    /// Insert when the DTO carries no id, otherwise update that id in place.
    /// The stored id never changes on update.
    #[instrument(skip(self, dto), fields(recipe_id = ?dto.id))]
    pub async fn save(&self, dto: &RecipeDto) -> Result<recipe::Model, ServiceError> {
        match dto.id {
            None => {
                let created = self.repo.insert(dto).await?;
                info!(recipe_id = created.id, "recipe created");
                Ok(created)
            }
            Some(id) => self.repo.update(id, dto).await,
        }
    }

    /// Idempotent: deleting an id that is already gone is a logged no-op.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        let removed = self.repo.delete(id).await?;
        if removed {
            info!(recipe_id = id, "recipe deleted");
        } else {
            info!(recipe_id = id, "delete requested for missing recipe, ignoring");
        }
        Ok(())
    }
}
