use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Users: login looks up by full name
        manager
            .create_index(
                Index::create()
                    .name("idx_users_full_name")
                    .table(Users::Table)
                    .col(Users::FullName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_category")
                    .table(Products::Table)
                    .col(Products::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_user")
                    .table(Orders::Table)
                    .col(Orders::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_items_order")
                    .table(OrderItems::Table)
                    .col(OrderItems::OrderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_product")
                    .table(Reviews::Table)
                    .col(Reviews::ProductId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_users_full_name").table(Users::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_products_category").table(Products::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_orders_user").table(Orders::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_items_order").table(OrderItems::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_reviews_product").table(Reviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users { Table, FullName }

#[derive(DeriveIden)]
enum Products { Table, CategoryId }

#[derive(DeriveIden)]
enum Orders { Table, UserId }

#[derive(DeriveIden)]
enum OrderItems { Table, OrderId }

#[derive(DeriveIden)]
enum Reviews { Table, ProductId }
