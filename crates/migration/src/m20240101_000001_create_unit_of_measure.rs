//! Create `unit_of_measure` table: read-mostly reference data for
//! ingredient forms.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UnitOfMeasure::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UnitOfMeasure::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(UnitOfMeasure::Description, 64).unique_key().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UnitOfMeasure::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UnitOfMeasure {
    Table,
    Id,
    Description,
}
