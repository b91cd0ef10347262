//! Create `users` table.
//!
//! Email is unique; only the bcrypt hash of the password is stored.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Users::FullName, 100))
                    .col(string_len(Users::Email, 100).unique_key())
                    .col(string_len(Users::PasswordHash, 255))
                    .col(string_len_null(Users::PhoneNumber, 32))
                    .col(text_null(Users::Address))
                    .col(string_len(Users::Role, 32).default("customer"))
                    .col(string_len_null(Users::ProfileImageUrl, 512))
                    .col(timestamp_with_time_zone(Users::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Users { Table, Id, FullName, Email, PasswordHash, PhoneNumber, Address, Role, ProfileImageUrl, CreatedAt }
