pub mod db;
pub mod errors;
pub mod ingredient;
pub mod recipe;
pub mod unit_of_measure;

#[cfg(test)]
mod tests;
