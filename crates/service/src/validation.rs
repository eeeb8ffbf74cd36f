//! Input checks for creation payloads.
//!
//! Each validator is pure and returns every violation it finds, in field order.
//! An empty [`ValidationErrors`] means the input is acceptable.

use serde::Serialize;
use thiserror::Error;

use crate::administrator::domain::{AdministratorInput, Role};
use crate::vehicle::domain::VehicleInput;

pub const EMPTY_EMAIL: &str = "email must not be empty";
pub const EMPTY_PASSWORD: &str = "password must not be empty";
pub const EMPTY_ROLE: &str = "role must not be empty";
pub const UNKNOWN_ROLE: &str = "role must be one of: Adm, Editor";
pub const EMPTY_NAME: &str = "name must not be empty";
pub const EMPTY_BRAND: &str = "brand must not be empty";
pub const VEHICLE_TOO_OLD: &str = "vehicle too old, only years from 1950 onward are accepted";

/// Oldest accepted manufacture year (inclusive)
pub const MIN_VEHICLE_YEAR: i32 = 1950;

/// Ordered list of rejected-input messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("validation failed: {}", .messages.join("; "))]
pub struct ValidationErrors {
    pub messages: Vec<String>,
}

impl ValidationErrors {
    pub fn push(&mut self, message: &str) { self.messages.push(message.to_string()); }

    pub fn is_empty(&self) -> bool { self.messages.is_empty() }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

fn blank(s: &str) -> bool { s.trim().is_empty() }

pub fn validate_administrator(input: &AdministratorInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    if blank(&input.email) { errors.push(EMPTY_EMAIL); }
    if blank(&input.password) { errors.push(EMPTY_PASSWORD); }
    match input.role.as_deref() {
        None => errors.push(EMPTY_ROLE),
        Some(r) if blank(r) => errors.push(EMPTY_ROLE),
        Some(r) if r.parse::<Role>().is_err() => errors.push(UNKNOWN_ROLE),
        Some(_) => {}
    }
    errors
}

pub fn validate_vehicle(input: &VehicleInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    if blank(&input.name) { errors.push(EMPTY_NAME); }
    if blank(&input.brand) { errors.push(EMPTY_BRAND); }
    if input.year < MIN_VEHICLE_YEAR { errors.push(VEHICLE_TOO_OLD); }
    errors
}
