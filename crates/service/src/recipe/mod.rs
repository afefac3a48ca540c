pub mod repository;
pub mod service;

pub use repository::{RecipeRepository, SeaOrmRecipeRepository};
pub use service::RecipeService;
