

use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::{connect_with_config, DatabaseConfig};

/// Fresh in-memory database with the schema applied
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
