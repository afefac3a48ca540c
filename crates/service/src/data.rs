//! Form-bound transfer representations of the persisted entities.
//!
//! DTOs are flat: they carry foreign-key ids (`recipeId`, `uomId`) instead of
//! owned sub-objects, and their field names follow the camelCase names the
//! HTML forms submit. Blank form fields bind to `None`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ServiceError;

/// One validation failure, addressed to the offending form field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, err: models::errors::ModelError) -> Self {
        Self { field, message: err.to_string() }
    }
}

/// HTML forms submit blank inputs as empty strings; treat those as absent.
fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecipeDto {
    #[serde(deserialize_with = "empty_string_as_none")]
    pub id: Option<i64>,
    pub description: String,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub prep_time: Option<i32>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub cook_time: Option<i32>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub servings: Option<i32>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub source: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub url: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub directions: Option<String>,
}

impl RecipeDto {
    /// Declarative-constraint stand-in: every violated constraint becomes a
    /// field error; an empty result means the DTO may be persisted.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if let Err(e) = models::recipe::validate_description(&self.description) {
            errors.push(FieldError::new("description", e));
        }
        if let Some(url) = &self.url {
            if let Err(e) = models::recipe::validate_url(url) {
                errors.push(FieldError::new("url", e));
            }
        }
        let minutes = [
            ("prepTime", self.prep_time),
            ("cookTime", self.cook_time),
            ("servings", self.servings),
        ];
        for (field, value) in minutes {
            if let Some(v) = value {
                if let Err(e) = models::recipe::validate_minutes(field, v) {
                    errors.push(FieldError::new(field, e));
                }
            }
        }
        errors
    }
}

impl From<models::recipe::Model> for RecipeDto {
    fn from(m: models::recipe::Model) -> Self {
        Self {
            id: Some(m.id),
            description: m.description,
            prep_time: m.prep_time,
            cook_time: m.cook_time,
            servings: m.servings,
            source: m.source,
            url: m.url,
            directions: m.directions,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IngredientDto {
    #[serde(deserialize_with = "empty_string_as_none")]
    pub id: Option<i64>,
    pub recipe_id: i64,
    pub description: String,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub uom_id: Option<i64>,
}

impl IngredientDto {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if let Err(e) = models::ingredient::validate_description(&self.description) {
            errors.push(FieldError::new("description", e));
        }
        if let Some(amount) = self.amount {
            if let Err(e) = models::ingredient::validate_amount(amount) {
                errors.push(FieldError::new("amount", e));
            }
        }
        errors
    }

    /// Id required for update paths.
    pub fn require_id(&self) -> Result<i64, ServiceError> {
        self.id.ok_or_else(|| ServiceError::Validation("ingredient id is required".into()))
    }
}

impl From<models::ingredient::Model> for IngredientDto {
    fn from(m: models::ingredient::Model) -> Self {
        Self {
            id: Some(m.id),
            recipe_id: m.recipe_id,
            description: m.description,
            amount: m.amount,
            uom_id: m.uom_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitOfMeasureDto {
    pub id: i64,
    pub description: String,
}

impl From<models::unit_of_measure::Model> for UnitOfMeasureDto {
    fn from(m: models::unit_of_measure::Model) -> Self {
        Self { id: m.id, description: m.description }
    }
}
