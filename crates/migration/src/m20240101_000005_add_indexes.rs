use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Ingredient: lookup by owning recipe
        manager
            .create_index(
                Index::create()
                    .name("idx_ingredient_recipe")
                    .table(Ingredient::Table)
                    .col(Ingredient::RecipeId)
                    .to_owned(),
            )
            .await?;

        // Ingredient: lookup by unit of measure
        manager
            .create_index(
                Index::create()
                    .name("idx_ingredient_uom")
                    .table(Ingredient::Table)
                    .col(Ingredient::UomId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_ingredient_recipe")
                    .table(Ingredient::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_ingredient_uom")
                    .table(Ingredient::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Ingredient {
    Table,
    RecipeId,
    UomId,
}
