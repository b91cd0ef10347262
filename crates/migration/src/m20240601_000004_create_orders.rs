//! Create `orders` table with FK to `users`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(big_integer(Orders::UserId))
                    .col(timestamp_with_time_zone(Orders::OrderDate).default(Expr::current_timestamp()))
                    .col(decimal_len(Orders::TotalAmount, 10, 2))
                    .col(string_len(Orders::Status, 32).default("pending"))
                    .col(text(Orders::ShippingAddress))
                    .col(string_len_null(Orders::PaymentMethod, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_user")
                            .from(Orders::Table, Orders::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Orders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Orders { Table, Id, UserId, OrderDate, TotalAmount, Status, ShippingAddress, PaymentMethod }

#[derive(DeriveIden)]
enum Users { Table, Id }
