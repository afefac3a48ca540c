//! Migrator registering entity-specific migrations in dependency order.
//! Reference data is seeded after the tables exist; indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_unit_of_measure;
mod m20240101_000002_create_recipe;
mod m20240101_000003_create_ingredient;
mod m20240101_000004_seed_units;
mod m20240101_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_unit_of_measure::Migration),
            Box::new(m20240101_000002_create_recipe::Migration),
            Box::new(m20240101_000003_create_ingredient::Migration),
            Box::new(m20240101_000004_seed_units::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000005_add_indexes::Migration),
        ]
    }
}
