//! Vehicle records: domain, repository, service.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::VehicleService;
