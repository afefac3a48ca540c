//! Create `ingredient` table with FKs to `recipe` and `unit_of_measure`.
//!
//! Ingredients have no independent lifecycle; deleting a recipe cascades
//! to its ingredients. The unit-of-measure reference is optional.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ingredient::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ingredient::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(big_integer(Ingredient::RecipeId).not_null())
                    .col(string_len(Ingredient::Description, 255).not_null())
                    .col(double_null(Ingredient::Amount))
                    .col(big_integer_null(Ingredient::UomId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ingredient_recipe")
                            .from(Ingredient::Table, Ingredient::RecipeId)
                            .to(Recipe::Table, Recipe::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ingredient_uom")
                            .from(Ingredient::Table, Ingredient::UomId)
                            .to(UnitOfMeasure::Table, UnitOfMeasure::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ingredient::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ingredient {
    Table,
    Id,
    RecipeId,
    Description,
    Amount,
    UomId,
}

#[derive(DeriveIden)]
enum Recipe {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum UnitOfMeasure {
    Table,
    Id,
}
