//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_users;
mod m20240601_000002_create_categories;
mod m20240601_000003_create_products;
mod m20240601_000004_create_orders;
mod m20240601_000005_create_order_items;
mod m20240601_000006_create_reviews;
mod m20240601_000007_create_services;
mod m20240601_000008_create_appointments;
mod m20240601_000009_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_users::Migration),
            Box::new(m20240601_000002_create_categories::Migration),
            Box::new(m20240601_000003_create_products::Migration),
            Box::new(m20240601_000004_create_orders::Migration),
            Box::new(m20240601_000005_create_order_items::Migration),
            Box::new(m20240601_000006_create_reviews::Migration),
            Box::new(m20240601_000007_create_services::Migration),
            Box::new(m20240601_000008_create_appointments::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000009_add_indexes::Migration),
        ]
    }
}
