//! Create `recipe` table.
//!
//! Holds the descriptive fields plus an optional binary image payload.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipe::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Recipe::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Recipe::Description, 255).not_null())
                    .col(integer_null(Recipe::PrepTime))
                    .col(integer_null(Recipe::CookTime))
                    .col(integer_null(Recipe::Servings))
                    .col(string_null(Recipe::Source))
                    .col(string_null(Recipe::Url))
                    .col(text_null(Recipe::Directions))
                    // Explicitly nullable blob; only the image path writes it
                    .col(ColumnDef::new(Recipe::Image).blob().null())
                    .col(timestamp_with_time_zone(Recipe::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Recipe::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recipe::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Recipe {
    Table,
    Id,
    Description,
    PrepTime,
    CookTime,
    Servings,
    Source,
    Url,
    Directions,
    Image,
    CreatedAt,
    UpdatedAt,
}
