use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};

use super::domain::{NewVehicle, Vehicle};
use crate::errors::ServiceError;
use crate::pagination::Pagination;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn insert(&self, new: NewVehicle) -> Result<Vehicle, ServiceError>;
    /// Ordered by id; `None` returns every row
    async fn list(&self, page: Option<Pagination>) -> Result<Vec<Vehicle>, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmVehicleRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl VehicleRepository for SeaOrmVehicleRepository {
    async fn insert(&self, new: NewVehicle) -> Result<Vehicle, ServiceError> {
        let created = models::vehicle::create(&self.db, &new.name, &new.brand, new.year).await?;
        Ok(created.into())
    }

    async fn list(&self, page: Option<Pagination>) -> Result<Vec<Vehicle>, ServiceError> {
        let query = models::vehicle::Entity::find().order_by_asc(models::vehicle::Column::Id);
        let rows = match page {
            Some(p) => {
                let (page_idx, per_page) = p.normalize();
                query.paginate(&self.db, per_page).fetch_page(page_idx).await?
            }
            None => query.all(&self.db).await?,
        };
        Ok(rows.into_iter().map(Vehicle::from).collect())
    }
}

pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockVehicleRepository {
        rows: Mutex<Vec<Vehicle>>,
    }

    #[async_trait]
    impl VehicleRepository for MockVehicleRepository {
        async fn insert(&self, new: NewVehicle) -> Result<Vehicle, ServiceError> {
            let mut rows = self.rows.lock().map_err(|_| ServiceError::Db("mock repository poisoned".into()))?;
            let created = Vehicle { id: rows.len() as i32 + 1, name: new.name, brand: new.brand, year: new.year };
            rows.push(created.clone());
            Ok(created)
        }

        async fn list(&self, page: Option<Pagination>) -> Result<Vec<Vehicle>, ServiceError> {
            let rows = self.rows.lock().map_err(|_| ServiceError::Db("mock repository poisoned".into()))?;
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
