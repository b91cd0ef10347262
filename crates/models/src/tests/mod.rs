/// Database connection and migration tests
pub mod db_tests;

/// CRUD round trips for every entity against a live database
pub mod crud_tests;

use anyhow::Result;
use sea_orm::DatabaseConnection;

/// Connected and migrated database, or `None` when DB tests are disabled.
pub(crate) async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        println!("Skipping database tests (no DATABASE_URL or SKIP_DB_TESTS set)");
        return Ok(None);
    }
    let db = crate::db::connect().await?;
    crate::db::migrate(&db).await?;
    Ok(Some(db))
}
