use serde::{Deserialize, Serialize};

use crate::validation::{validate_vehicle, ValidationErrors};

/// Creation payload as received
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub year: i32,
}

/// Validated creation input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVehicle {
    pub name: String,
    pub brand: String,
    pub year: i32,
}

impl TryFrom<VehicleInput> for NewVehicle {
    type Error = ValidationErrors;

    fn try_from(input: VehicleInput) -> Result<Self, Self::Error> {
        validate_vehicle(&input).into_result()?;
        Ok(Self { name: input.name, brand: input.brand, year: input.year })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub year: i32,
}

impl From<models::vehicle::Model> for Vehicle {
    fn from(m: models::vehicle::Model) -> Self {
        Self { id: m.id, name: m.name, brand: m.brand, year: m.year }
    }
}
