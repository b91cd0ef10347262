use crate::db::{connect_with_config, DATABASE_URL};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use std::time::{Duration, Instant};
use anyhow::Result;

/// Test basic database connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let Some(db) = super::setup_test_db().await? else { return Ok(()) };

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1 as test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);
    Ok(())
}

/// Test connection built from the `[database]` section
#[tokio::test]
async fn test_custom_config_connection() -> Result<()> {
    if super::setup_test_db().await?.is_none() {
        return Ok(());
    }

    let config = configs::DatabaseConfig {
        url: DATABASE_URL.clone(),
        max_connections: 3,
        min_connections: 1,
        connect_timeout_secs: 10,
        ..Default::default()
    };

    let start = Instant::now();
    let db = connect_with_config(&config).await?;
    assert!(start.elapsed() < Duration::from_secs(10));

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT current_database()".to_string());
    assert!(db.query_one(stmt).await?.is_some());
    Ok(())
}

/// Every table from the migrations exists
#[tokio::test]
async fn test_tables_exist_after_migrate() -> Result<()> {
    let Some(db) = super::setup_test_db().await? else { return Ok(()) };

    for table in ["users", "categories", "products", "orders", "order_items", "reviews", "services", "appointments"] {
        let stmt = Statement::from_string(
            DatabaseBackend::Postgres,
            format!("SELECT to_regclass('public.{table}')::text AS name"),
        );
        let row = db.query_one(stmt).await?.expect("one row");
        let name: Option<String> = row.try_get("", "name")?;
        assert_eq!(name.as_deref(), Some(table), "missing table {table}");
    }
    Ok(())
}
