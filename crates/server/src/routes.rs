use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::state::AppState;

pub mod images;
pub mod ingredients;
pub mod recipes;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// The full route table: one handler per (method, path) pair, each handler
/// making exactly one service call.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(recipes::index))
        .route("/health", get(health))
        .route("/recipe/new", get(recipes::new_form))
        .route("/recipe", post(recipes::save))
        .route("/recipe/:id/show", get(recipes::show))
        .route("/recipe/:id/update", get(recipes::update_form))
        .route("/recipe/:id/delete", get(recipes::delete))
        .route("/recipe/:id/image", get(images::upload_form).post(images::upload))
        .route("/recipe/:id/recipeimage", get(images::render))
        .route("/recipe/:id/ingredients", get(ingredients::index))
        .route("/recipe/:id/ingredient", post(ingredients::save))
        .route("/recipe/:id/ingredient/new", get(ingredients::new_form))
        .route("/recipe/:id/ingredient/:ingredient_id/show", get(ingredients::show))
        .route("/recipe/:id/ingredient/:ingredient_id/update", get(ingredients::update_form))
        .route("/recipe/:id/ingredient/:ingredient_id/delete", get(ingredients::delete))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
