use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Redirect, Response};

use service::data::RecipeDto;
use service::errors::ServiceError;

use crate::errors::{parse_id, AppError};
use crate::state::AppState;
use crate::view::View;

pub async fn upload_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<View, AppError> {
    let id = parse_id(&id)?;
    let recipe = state.recipes.get_by_id(id).await?;
    Ok(View::new("recipe/imageuploadform").with("recipe", RecipeDto::from(recipe)))
}

/// Accepts the first file part of the multipart body as the image payload.
/// No format or size policing here; the bytes are stored as submitted.
pub async fn upload(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Service(ServiceError::Validation(e.to_string())))?
    {
        if field.file_name().is_none() && field.name() != Some("imagefile") {
            continue;
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Service(ServiceError::Validation(e.to_string())))?;
        state.images.save_image_file(id, bytes.to_vec()).await?;
        return Ok(Redirect::to(&format!("/recipe/{}/show", id)).into_response());
    }
    Err(AppError::Service(ServiceError::Validation(
        "multipart body carried no file".into(),
    )))
}

/// Raw stored bytes; the browser decides how to render them.
pub async fn render(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let bytes = state.images.get_image(id).await?;
    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], bytes).into_response())
}
