use std::sync::Arc;

use tracing::{info, instrument};

use crate::data::IngredientDto;
use crate::errors::ServiceError;
use crate::ingredient::repository::IngredientRepository;
use crate::recipe::repository::RecipeRepository;
use crate::unit_of_measure::UnitOfMeasureRepository;

/// Ingredient operations are always scoped to an owning recipe; the recipe
/// must exist before anything is read or written under it.
pub struct IngredientService {
    recipes: Arc<dyn RecipeRepository>,
    ingredients: Arc<dyn IngredientRepository>,
    units: Arc<dyn UnitOfMeasureRepository>,
}

impl IngredientService {
    pub fn new(
        recipes: Arc<dyn RecipeRepository>,
        ingredients: Arc<dyn IngredientRepository>,
        units: Arc<dyn UnitOfMeasureRepository>,
    ) -> Self {
        Self { recipes, ingredients, units }
    }

    async fn ensure_recipe_exists(&self, recipe_id: i64) -> Result<(), ServiceError> {
        self.recipes
            .find_by_id(recipe_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::not_found("recipe"))
    }

    pub async fn get_all_for_recipe(
        &self,
        recipe_id: i64,
    ) -> Result<Vec<IngredientDto>, ServiceError> {
        self.ensure_recipe_exists(recipe_id).await?;
        let rows = self.ingredients.find_by_recipe(recipe_id).await?;
        Ok(rows.into_iter().map(IngredientDto::from).collect())
    }

    pub async fn get_by_recipe_and_id(
        &self,
        recipe_id: i64,
        ingredient_id: i64,
    ) -> Result<IngredientDto, ServiceError> {
        self.ensure_recipe_exists(recipe_id).await?;
        let row = self
            .ingredients
            .find_by_recipe_and_id(recipe_id, ingredient_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("ingredient"))?;
        Ok(IngredientDto::from(row))
    }

    /// Append a new ingredient when the DTO carries no id, otherwise update
    /// the matching ingredient of that recipe in place. The returned DTO
    /// always carries the affected id.
    #[instrument(skip(self, dto), fields(recipe_id = dto.recipe_id, ingredient_id = ?dto.id))]
    pub async fn save_or_update(&self, dto: &IngredientDto) -> Result<IngredientDto, ServiceError> {
        self.ensure_recipe_exists(dto.recipe_id).await?;
        if let Some(uom_id) = dto.uom_id {
            self.units
                .find_by_id(uom_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("unit of measure"))?;
        }
        let saved = match dto.id {
            None => {
                let created = self.ingredients.insert(dto).await?;
                info!(ingredient_id = created.id, "ingredient created");
                created
            }
            Some(_) => self.ingredients.update(dto).await?,
        };
        Ok(IngredientDto::from(saved))
    }

    /// Idempotent: removing an ingredient that is already gone is a no-op.
    pub async fn delete(&self, recipe_id: i64, ingredient_id: i64) -> Result<(), ServiceError> {
        self.ensure_recipe_exists(recipe_id).await?;
        let removed = self.ingredients.delete(recipe_id, ingredient_id).await?;
        if removed {
            info!(recipe_id, ingredient_id, "ingredient deleted");
        } else {
            info!(recipe_id, ingredient_id, "delete requested for missing ingredient, ignoring");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::data::RecipeDto;
    use crate::ingredient::SeaOrmIngredientRepository;
    use crate::recipe::{RecipeService, SeaOrmRecipeRepository};
    use crate::test_support::setup_db;
    use crate::unit_of_measure::SeaOrmUnitOfMeasureRepository;

    struct Fixture {
        recipes: RecipeService,
        ingredients: IngredientService,
    }

    async fn fixture() -> anyhow::Result<Fixture> {
        let db = setup_db().await?;
        let recipe_repo = Arc::new(SeaOrmRecipeRepository { db: db.clone() });
        let ingredient_repo = Arc::new(SeaOrmIngredientRepository { db: db.clone() });
        let uom_repo = Arc::new(SeaOrmUnitOfMeasureRepository { db });
        Ok(Fixture {
            recipes: RecipeService::new(recipe_repo.clone()),
            ingredients: IngredientService::new(recipe_repo, ingredient_repo, uom_repo),
        })
    }

    async fn seed_recipe(f: &Fixture) -> anyhow::Result<i64> {
        let dto = RecipeDto { description: "Tacos".into(), ..Default::default() };
        Ok(f.recipes.save(&dto).await?.id)
    }

    #[tokio::test]
    async fn save_without_id_creates_and_assigns_id() -> anyhow::Result<()> {
        let f = fixture().await?;
        let recipe_id = seed_recipe(&f).await?;

        let dto = IngredientDto {
            recipe_id,
            description: "some string".into(),
            ..Default::default()
        };
        let saved = f.ingredients.save_or_update(&dto).await?;
        let id = saved.id.expect("assigned id");
        assert!(id > 0);
        assert_eq!(saved.recipe_id, recipe_id);

        let found = f.ingredients.get_by_recipe_and_id(recipe_id, id).await?;
        assert_eq!(found.description, "some string");
        Ok(())
    }

    #[tokio::test]
    async fn save_with_id_updates_in_place() -> anyhow::Result<()> {
        let f = fixture().await?;
        let recipe_id = seed_recipe(&f).await?;

        let created = f
            .ingredients
            .save_or_update(&IngredientDto {
                recipe_id,
                description: "salt".into(),
                amount: Some(1.0),
                ..Default::default()
            })
            .await?;

        let mut update = created.clone();
        update.description = "sea salt".into();
        update.amount = Some(0.5);
        let updated = f.ingredients.save_or_update(&update).await?;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.description, "sea salt");
        assert_eq!(updated.amount, Some(0.5));
        Ok(())
    }

    #[tokio::test]
    async fn save_against_missing_recipe_is_not_found() -> anyhow::Result<()> {
        let f = fixture().await?;
        let dto = IngredientDto { recipe_id: 99, description: "salt".into(), ..Default::default() };
        assert!(matches!(
            f.ingredients.save_or_update(&dto).await,
            Err(ServiceError::NotFound(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn dangling_unit_of_measure_is_not_found() -> anyhow::Result<()> {
        let f = fixture().await?;
        let recipe_id = seed_recipe(&f).await?;
        let dto = IngredientDto {
            recipe_id,
            description: "salt".into(),
            uom_id: Some(999),
            ..Default::default()
        };
        assert!(matches!(
            f.ingredients.save_or_update(&dto).await,
            Err(ServiceError::NotFound(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn lookup_is_scoped_to_the_owning_recipe() -> anyhow::Result<()> {
        let f = fixture().await?;
        let first = seed_recipe(&f).await?;
        let second = f
            .recipes
            .save(&RecipeDto { description: "Soup".into(), ..Default::default() })
            .await?
            .id;

        let created = f
            .ingredients
            .save_or_update(&IngredientDto {
                recipe_id: first,
                description: "salt".into(),
                ..Default::default()
            })
            .await?;
        let id = created.id.unwrap();

        // Present under its own recipe, absent under another
        assert!(f.ingredients.get_by_recipe_and_id(first, id).await.is_ok());
        assert!(matches!(
            f.ingredients.get_by_recipe_and_id(second, id).await,
            Err(ServiceError::NotFound(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_idempotent() -> anyhow::Result<()> {
        let f = fixture().await?;
        let recipe_id = seed_recipe(&f).await?;
        let created = f
            .ingredients
            .save_or_update(&IngredientDto {
                recipe_id,
                description: "salt".into(),
                ..Default::default()
            })
            .await?;
        let id = created.id.unwrap();

        f.ingredients.delete(recipe_id, id).await?;
        f.ingredients.delete(recipe_id, id).await?;
        assert!(f.ingredients.get_all_for_recipe(recipe_id).await?.is_empty());
        Ok(())
    }
}
