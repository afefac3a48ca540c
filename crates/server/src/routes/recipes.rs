use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use tracing::debug;

use service::data::RecipeDto;

use crate::errors::{parse_id, AppError};
use crate::state::AppState;
use crate::view::View;

const RECIPE_FORM_VIEW: &str = "recipe/form";

/// Landing page: all recipes.
pub async fn index(State(state): State<AppState>) -> Result<View, AppError> {
    let recipes: Vec<RecipeDto> = state
        .recipes
        .get_all()
        .await?
        .into_iter()
        .map(RecipeDto::from)
        .collect();
    Ok(View::new("index").with("recipes", recipes))
}

pub async fn new_form() -> View {
    View::new(RECIPE_FORM_VIEW).with("recipe", RecipeDto::default())
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<View, AppError> {
    let id = parse_id(&id)?;
    let recipe = state.recipes.get_by_id(id).await?;
    Ok(View::new("recipe/show").with("recipe", RecipeDto::from(recipe)))
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<View, AppError> {
    let id = parse_id(&id)?;
    let recipe = state.recipes.get_by_id(id).await?;
    Ok(View::new(RECIPE_FORM_VIEW).with("recipe", RecipeDto::from(recipe)))
}

/// Add-or-update: on validation failure the form is re-rendered with the
/// submitted values and nothing is persisted.
pub async fn save(
    State(state): State<AppState>,
    Form(dto): Form<RecipeDto>,
) -> Result<Response, AppError> {
    let errors = dto.validate();
    if !errors.is_empty() {
        for e in &errors {
            debug!(field = e.field, message = %e.message, "recipe form rejected");
        }
        let view = View::new(RECIPE_FORM_VIEW).with("recipe", dto).with("errors", errors);
        return Ok(view.into_response());
    }
    let saved = state.recipes.save(&dto).await?;
    Ok(Redirect::to(&format!("/recipe/{}/show", saved.id)).into_response())
}

/// Forgiving at this boundary: redirects whether or not the id existed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = parse_id(&id)?;
    state.recipes.delete_by_id(id).await?;
    Ok(Redirect::to("/"))
}
