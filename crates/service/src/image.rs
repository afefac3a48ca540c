//! Binary image attachment for recipes.
//!
//! No format validation or size limit at this layer; the upload-handling
//! infrastructure owns those concerns.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::recipe::repository::RecipeRepository;

pub struct ImageService {
    recipes: Arc<dyn RecipeRepository>,
}

impl ImageService {
    pub fn new(recipes: Arc<dyn RecipeRepository>) -> Self {
        Self { recipes }
    }

    /// Replace the recipe's stored image with the raw upload bytes,
    /// overwriting any prior payload unconditionally.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn save_image_file(&self, recipe_id: i64, bytes: Vec<u8>) -> Result<(), ServiceError> {
        self.recipes
            .find_by_id(recipe_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("recipe"))?;
        let size = bytes.len();
        self.recipes.set_image(recipe_id, bytes).await?;
        info!(recipe_id, size, "image stored");
        Ok(())
    }

    pub async fn get_image(&self, recipe_id: i64) -> Result<Vec<u8>, ServiceError> {
        let recipe = self
            .recipes
            .find_by_id(recipe_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("recipe"))?;
        recipe.image.ok_or_else(|| ServiceError::not_found("image"))
    }
}
