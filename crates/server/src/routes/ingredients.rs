use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use tracing::debug;

use service::data::{IngredientDto, RecipeDto};

use crate::errors::{parse_id, AppError};
use crate::state::AppState;
use crate::view::View;

const INGREDIENT_FORM_VIEW: &str = "recipe/ingredient/form";

pub async fn index(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<View, AppError> {
    let recipe_id = parse_id(&id)?;
    let recipe = state.recipes.get_by_id(recipe_id).await?;
    let ingredients = state.ingredients.get_all_for_recipe(recipe_id).await?;
    Ok(View::new("recipe/ingredient/index")
        .with("recipe", RecipeDto::from(recipe))
        .with("ingredients", ingredients))
}

pub async fn show(
    State(state): State<AppState>,
    Path((id, ingredient_id)): Path<(String, String)>,
) -> Result<View, AppError> {
    let recipe_id = parse_id(&id)?;
    let ingredient_id = parse_id(&ingredient_id)?;
    let ingredient = state.ingredients.get_by_recipe_and_id(recipe_id, ingredient_id).await?;
    Ok(View::new("recipe/ingredient/show").with("ingredient", ingredient))
}

pub async fn new_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<View, AppError> {
    let recipe_id = parse_id(&id)?;
    // The recipe must exist before a blank form is offered under it
    state.recipes.get_by_id(recipe_id).await?;
    let blank = IngredientDto { recipe_id, ..Default::default() };
    Ok(View::new(INGREDIENT_FORM_VIEW)
        .with("ingredient", blank)
        .with("unitOfMeasures", state.units.get_all().await?))
}

pub async fn update_form(
    State(state): State<AppState>,
    Path((id, ingredient_id)): Path<(String, String)>,
) -> Result<View, AppError> {
    let recipe_id = parse_id(&id)?;
    let ingredient_id = parse_id(&ingredient_id)?;
    let ingredient = state.ingredients.get_by_recipe_and_id(recipe_id, ingredient_id).await?;
    Ok(View::new(INGREDIENT_FORM_VIEW)
        .with("ingredient", ingredient)
        .with("unitOfMeasures", state.units.get_all().await?))
}

/// Save-or-update. The path's recipe id is authoritative over whatever the
/// form carried.
pub async fn save(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(mut dto): Form<IngredientDto>,
) -> Result<Response, AppError> {
    dto.recipe_id = parse_id(&id)?;
    let errors = dto.validate();
    if !errors.is_empty() {
        for e in &errors {
            debug!(field = e.field, message = %e.message, "ingredient form rejected");
        }
        let view = View::new(INGREDIENT_FORM_VIEW)
            .with("ingredient", dto)
            .with("unitOfMeasures", state.units.get_all().await?)
            .with("errors", errors);
        return Ok(view.into_response());
    }
    let saved = state.ingredients.save_or_update(&dto).await?;
    let ingredient_id = saved.require_id()?;
    let target = format!("/recipe/{}/ingredient/{}/show", saved.recipe_id, ingredient_id);
    Ok(Redirect::to(&target).into_response())
}

pub async fn delete(
    State(state): State<AppState>,
    Path((id, ingredient_id)): Path<(String, String)>,
) -> Result<Redirect, AppError> {
    let recipe_id = parse_id(&id)?;
    let ingredient_id = parse_id(&ingredient_id)?;
    state.ingredients.delete(recipe_id, ingredient_id).await?;
    Ok(Redirect::to(&format!("/recipe/{}/ingredients", recipe_id)))
}
