//! Migrator registering entity-specific migrations in dependency order.
//! The default administrator seed runs after the tables exist.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_administrators;
mod m20240101_000002_create_vehicles;
mod m20240101_000003_seed_default_administrator;

pub use m20240101_000003_seed_default_administrator::{DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_administrators::Migration),
            Box::new(m20240101_000002_create_vehicles::Migration),
            Box::new(m20240101_000003_seed_default_administrator::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

    // one pooled connection, otherwise every connection gets its own in-memory database
    async fn memory_db() -> Result<DatabaseConnection, DbErr> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1);
        Database::connect(opt).await
    }

    #[tokio::test]
    async fn up_creates_tables_and_seeds_admin() -> Result<(), DbErr> {
        let db = memory_db().await?;
        Migrator::up(&db, None).await?;

        let row = db
            .query_one(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT email, password, role FROM administrators".to_string(),
            ))
            .await?
            .expect("seeded row");
        let email: String = row.try_get("", "email")?;
        let role: String = row.try_get("", "role")?;
        assert_eq!(email, DEFAULT_ADMIN_EMAIL);
        assert_eq!(role, "Adm");

        let vehicles = db
            .query_one(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT COUNT(*) AS n FROM vehicles".to_string(),
            ))
            .await?
            .expect("count row");
        let n: i64 = vehicles.try_get("", "n")?;
        assert_eq!(n, 0);
        Ok(())
    }

    #[tokio::test]
    async fn down_drops_everything() -> Result<(), DbErr> {
        let db = memory_db().await?;
        Migrator::up(&db, None).await?;
        Migrator::down(&db, None).await?;
        let manager = SchemaManager::new(&db);
        assert!(!manager.has_table("administrators").await?);
        assert!(!manager.has_table("vehicles").await?);
        Ok(())
    }
}
