use std::sync::Arc;
use tracing::{info, instrument};

use super::domain::{NewVehicle, Vehicle};
use super::repository::VehicleRepository;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Application service for vehicle records.
/// Input is expected to be validated already (see [`NewVehicle`]'s `TryFrom`).
pub struct VehicleService<R: VehicleRepository> {
    repo: Arc<R>,
}

impl<R: VehicleRepository> VehicleService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, new), fields(name = %new.name, brand = %new.brand, year = new.year))]
    pub async fn create(&self, new: NewVehicle) -> Result<Vehicle, ServiceError> {
        let created = self.repo.insert(new).await?;
        info!(id = created.id, "vehicle_created");
        Ok(created)
    }

    pub async fn list(&self, page: Option<u32>) -> Result<Vec<Vehicle>, ServiceError> {
        self.repo.list(page.map(Pagination::page)).await
    }
}
