//! Create `products` table with an optional FK to `categories`.
//!
//! Prices are exact decimals; deleting a category that still has products is restricted.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(big_integer_null(Products::CategoryId))
                    .col(string_len(Products::Name, 150))
                    .col(text_null(Products::Description))
                    .col(decimal_len(Products::Price, 10, 2))
                    .col(integer(Products::StockQuantity).default(0))
                    .col(string_len_null(Products::ImageUrl, 512))
                    .col(string_len_null(Products::Brand, 100))
                    .col(integer_null(Products::ModelYear))
                    .col(integer_null(Products::EngineCc))
                    .col(string_len_null(Products::Color, 50))
                    .col(string_len(Products::ConditionStatus, 32).default("new"))
                    .col(timestamp_with_time_zone(Products::CreatedAt).default(Expr::current_timestamp()))
                    .check(Expr::col(Products::Price).gte(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_category")
                            .from(Products::Table, Products::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Products::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    CategoryId,
    Name,
    Description,
    Price,
    StockQuantity,
    ImageUrl,
    Brand,
    ModelYear,
    EngineCc,
    Color,
    ConditionStatus,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Categories { Table, Id }
