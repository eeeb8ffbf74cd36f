//! Persistence context: sea-orm entities for `administrators` and `vehicles`
//! plus the pooled database connection.

pub mod errors;
pub mod db;
pub mod administrator;
pub mod vehicle;

#[cfg(test)]
mod tests;
