use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};

use super::domain::{Administrator, NewAdministrator};
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Repository abstraction for administrator persistence.
#[async_trait]
pub trait AdministratorRepository: Send + Sync {
    async fn find_by_credentials(&self, email: &str, password: &str) -> Result<Option<Administrator>, ServiceError>;
    async fn insert(&self, new: NewAdministrator) -> Result<Administrator, ServiceError>;
    /// Ordered by id; `None` returns every row
    async fn list(&self, page: Option<Pagination>) -> Result<Vec<Administrator>, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmAdministratorRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl AdministratorRepository for SeaOrmAdministratorRepository {
    async fn find_by_credentials(&self, email: &str, password: &str) -> Result<Option<Administrator>, ServiceError> {
        let found = models::administrator::find_by_credentials(&self.db, email, password).await?;
        Ok(found.map(Administrator::from))
    }

    async fn insert(&self, new: NewAdministrator) -> Result<Administrator, ServiceError> {
        let created = models::administrator::create(&self.db, &new.email, &new.password, new.role).await?;
        Ok(created.into())
    }

    async fn list(&self, page: Option<Pagination>) -> Result<Vec<Administrator>, ServiceError> {
        let query = models::administrator::Entity::find().order_by_asc(models::administrator::Column::Id);
        let rows = match page {
            Some(p) => {
                let (page_idx, per_page) = p.normalize();
                // SeaORM's paginate uses 0-based page index internally via fetch_page
                query.paginate(&self.db, per_page).fetch_page(page_idx).await?
            }
            None => query.all(&self.db).await?,
        };
        Ok(rows.into_iter().map(Administrator::from).collect())
    }
}

/// Simple in-memory mock repository for tests and benches
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAdministratorRepository {
        rows: Mutex<Vec<Administrator>>,
    }

    impl MockAdministratorRepository {
        fn rows(&self) -> Result<std::sync::MutexGuard<'_, Vec<Administrator>>, ServiceError> {
            self.rows.lock().map_err(|_| ServiceError::Db("mock repository poisoned".into()))
        }
    }

    #[async_trait]
    impl AdministratorRepository for MockAdministratorRepository {
        async fn find_by_credentials(&self, email: &str, password: &str) -> Result<Option<Administrator>, ServiceError> {
            let rows = self.rows()?;
            Ok(rows.iter().find(|a| a.email == email && a.password == password).cloned())
        }

        async fn insert(&self, new: NewAdministrator) -> Result<Administrator, ServiceError> {
            let mut rows = self.rows()?;
            if rows.iter().any(|a| a.email == new.email) {
                return Err(ServiceError::Db(format!("duplicate email {}", new.email)));
            }
            let created = Administrator { id: rows.len() as i32 + 1, email: new.email, password: new.password, role: new.role };
            rows.push(created.clone());
            Ok(created)
        }

        async fn list(&self, page: Option<Pagination>) -> Result<Vec<Administrator>, ServiceError> {
            let rows = self.rows()?;
            Ok(match page {
                Some(p) => {
                    let (_, per_page) = p.normalize();
                    rows.iter().skip(p.offset() as usize).take(per_page as usize).cloned().collect()
                }
                None => rows.clone(),
            })
        }
    }
}
