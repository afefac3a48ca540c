//! Seed the unit-of-measure reference rows used by ingredient forms.
use sea_orm_migration::prelude::*;

pub const UNITS: [&str; 9] = [
    "Teaspoon", "Tablespoon", "Cup", "Pinch", "Ounce", "Gram", "Pint", "Dash", "Each",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(UnitOfMeasure::Table)
            .columns([UnitOfMeasure::Description])
            .to_owned();
        for unit in UNITS {
            insert.values_panic([unit.into()]);
        }
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(UnitOfMeasure::Table)
            .and_where(Expr::col(UnitOfMeasure::Description).is_in(UNITS))
            .to_owned();
        manager.exec_stmt(delete).await
    }
}

#[derive(DeriveIden)]
enum UnitOfMeasure {
    Table,
    Description,
}
