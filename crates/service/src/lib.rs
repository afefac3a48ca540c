//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access behind repository traits.
//! - Reuses validation and entity definitions from the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod data;
pub mod errors;
pub mod image;
pub mod ingredient;
pub mod recipe;
pub mod unit_of_measure;

#[cfg(test)]
pub mod test_support;
