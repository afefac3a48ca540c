use std::sync::Arc;

use sea_orm::DatabaseConnection;

use service::image::ImageService;
use service::ingredient::{
    IngredientRepository, IngredientService, SeaOrmIngredientRepository,
};
use service::recipe::{RecipeRepository, RecipeService, SeaOrmRecipeRepository};
use service::unit_of_measure::{
    SeaOrmUnitOfMeasureRepository, UnitOfMeasureRepository, UnitOfMeasureService,
};

/// All services, composed once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub recipes: Arc<RecipeService>,
    pub ingredients: Arc<IngredientService>,
    pub units: Arc<UnitOfMeasureService>,
    pub images: Arc<ImageService>,
}

impl AppState {
    /// Production wiring: every repository backed by the same connection pool.
    pub fn from_db(db: DatabaseConnection) -> Self {
        let recipe_repo = Arc::new(SeaOrmRecipeRepository { db: db.clone() });
        let ingredient_repo = Arc::new(SeaOrmIngredientRepository { db: db.clone() });
        let uom_repo = Arc::new(SeaOrmUnitOfMeasureRepository { db });
        Self::from_parts(recipe_repo, ingredient_repo, uom_repo)
    }

    /// Explicit construction from repositories; tests inject doubles here.
    pub fn from_parts(
        recipe_repo: Arc<dyn RecipeRepository>,
        ingredient_repo: Arc<dyn IngredientRepository>,
        uom_repo: Arc<dyn UnitOfMeasureRepository>,
    ) -> Self {
        Self {
            recipes: Arc::new(RecipeService::new(recipe_repo.clone())),
            ingredients: Arc::new(IngredientService::new(
                recipe_repo.clone(),
                ingredient_repo,
                uom_repo.clone(),
            )),
            units: Arc::new(UnitOfMeasureService::new(uom_repo)),
            images: Arc::new(ImageService::new(recipe_repo)),
        }
    }
}
