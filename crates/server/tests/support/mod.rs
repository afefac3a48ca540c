#![allow(dead_code)]
//! In-memory repository doubles for driving the router without a database,
//! plus helpers for reading the `{"view", "model"}` response shape.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::Router;
use chrono::Utc;
use tower_http::cors::CorsLayer;

use models::{ingredient, recipe, unit_of_measure};
use server::routes::build_router;
use server::state::AppState;
use service::data::{IngredientDto, RecipeDto};
use service::errors::ServiceError;
use service::ingredient::IngredientRepository;
use service::recipe::RecipeRepository;
use service::unit_of_measure::UnitOfMeasureRepository;

pub struct InMemoryRecipeRepo {
    rows: Mutex<BTreeMap<i64, recipe::Model>>,
    next_id: AtomicI64,
    /// Counts writes, so tests can assert nothing was persisted.
    pub saves: AtomicI64,
}

impl InMemoryRecipeRepo {
    pub fn new() -> Self {
        Self { rows: Mutex::new(BTreeMap::new()), next_id: AtomicI64::new(1), saves: AtomicI64::new(0) }
    }

    pub fn seed(&self, description: &str) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now().into();
        let model = recipe::Model {
            id,
            description: description.to_string(),
            prep_time: None,
            cook_time: None,
            servings: None,
            source: None,
            url: None,
            directions: None,
            image: None,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().insert(id, model);
        id
    }

    pub fn image_of(&self, id: i64) -> Option<Vec<u8>> {
        self.rows.lock().unwrap().get(&id).and_then(|r| r.image.clone())
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepo {
    async fn find_by_id(&self, id: i64) -> Result<Option<recipe::Model>, ServiceError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<recipe::Model>, ServiceError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn insert(&self, dto: &RecipeDto) -> Result<recipe::Model, ServiceError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now().into();
        let model = recipe::Model {
            id,
            description: dto.description.clone(),
            prep_time: dto.prep_time,
            cook_time: dto.cook_time,
            servings: dto.servings,
            source: dto.source.clone(),
            url: dto.url.clone(),
            directions: dto.directions.clone(),
            image: None,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().insert(id, model.clone());
        Ok(model)
    }

    async fn update(&self, id: i64, dto: &RecipeDto) -> Result<recipe::Model, ServiceError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let existing = rows.get_mut(&id).ok_or_else(|| ServiceError::not_found("recipe"))?;
        existing.description = dto.description.clone();
        existing.prep_time = dto.prep_time;
        existing.cook_time = dto.cook_time;
        existing.servings = dto.servings;
        existing.source = dto.source.clone();
        existing.url = dto.url.clone();
        existing.directions = dto.directions.clone();
        existing.updated_at = Utc::now().into();
        Ok(existing.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }

    async fn set_image(&self, id: i64, bytes: Vec<u8>) -> Result<(), ServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let existing = rows.get_mut(&id).ok_or_else(|| ServiceError::not_found("recipe"))?;
        existing.image = Some(bytes);
        Ok(())
    }
}

pub struct InMemoryIngredientRepo {
    rows: Mutex<BTreeMap<i64, ingredient::Model>>,
    next_id: AtomicI64,
    pub saves: AtomicI64,
}

impl InMemoryIngredientRepo {
    pub fn new() -> Self {
        Self { rows: Mutex::new(BTreeMap::new()), next_id: AtomicI64::new(1), saves: AtomicI64::new(0) }
    }

    pub fn seed(&self, recipe_id: i64, description: &str) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let model = ingredient::Model {
            id,
            recipe_id,
            description: description.to_string(),
            amount: None,
            uom_id: None,
        };
        self.rows.lock().unwrap().insert(id, model);
        id
    }
}

#[async_trait]
impl IngredientRepository for InMemoryIngredientRepo {
    async fn find_by_recipe(
        &self,
        recipe_id: i64,
    ) -> Result<Vec<ingredient::Model>, ServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|i| i.recipe_id == recipe_id)
            .cloned()
            .collect())
    }

    async fn find_by_recipe_and_id(
        &self,
        recipe_id: i64,
        id: i64,
    ) -> Result<Option<ingredient::Model>, ServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .get(&id)
            .filter(|i| i.recipe_id == recipe_id)
            .cloned())
    }

    async fn insert(&self, dto: &IngredientDto) -> Result<ingredient::Model, ServiceError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let model = ingredient::Model {
            id,
            recipe_id: dto.recipe_id,
            description: dto.description.clone(),
            amount: dto.amount,
            uom_id: dto.uom_id,
        };
        self.rows.lock().unwrap().insert(id, model.clone());
        Ok(model)
    }

    async fn update(&self, dto: &IngredientDto) -> Result<ingredient::Model, ServiceError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        let id = dto.require_id()?;
        let mut rows = self.rows.lock().unwrap();
        let existing = rows
            .get_mut(&id)
            .filter(|i| i.recipe_id == dto.recipe_id)
            .ok_or_else(|| ServiceError::not_found("ingredient"))?;
        existing.description = dto.description.clone();
        existing.amount = dto.amount;
        existing.uom_id = dto.uom_id;
        Ok(existing.clone())
    }

    async fn delete(&self, recipe_id: i64, id: i64) -> Result<bool, ServiceError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get(&id) {
            Some(i) if i.recipe_id == recipe_id => {
                rows.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

pub struct FixedUomRepo;

fn unit(id: i64, description: &str) -> unit_of_measure::Model {
    unit_of_measure::Model { id, description: description.to_string() }
}

#[async_trait]
impl UnitOfMeasureRepository for FixedUomRepo {
    async fn find_all(&self) -> Result<Vec<unit_of_measure::Model>, ServiceError> {
        Ok(vec![unit(1, "Teaspoon"), unit(2, "Cup"), unit(3, "Each")])
    }

    async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<Option<unit_of_measure::Model>, ServiceError> {
        Ok(self.find_all().await?.into_iter().find(|u| u.id == id))
    }
}

pub struct TestApp {
    pub router: Router,
    pub recipes: Arc<InMemoryRecipeRepo>,
    pub ingredients: Arc<InMemoryIngredientRepo>,
}

pub fn test_app() -> TestApp {
    let recipes = Arc::new(InMemoryRecipeRepo::new());
    let ingredients = Arc::new(InMemoryIngredientRepo::new());
    let state =
        AppState::from_parts(recipes.clone(), ingredients.clone(), Arc::new(FixedUomRepo));
    let router = build_router(state, CorsLayer::very_permissive());
    TestApp { router, recipes, ingredients }
}

/// Read the response body as the `{"view", "model"}` document.
pub async fn view_body(body: Body) -> serde_json::Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
