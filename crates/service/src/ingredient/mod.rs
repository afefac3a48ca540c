pub mod repository;
pub mod service;

pub use repository::{IngredientRepository, SeaOrmIngredientRepository};
pub use service::IngredientService;
