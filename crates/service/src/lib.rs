//! Service layer for administrators and vehicles on top of `models`.
//! - Repositories abstract persistence; services hold the business rules.
//! - Token issuance and input validation live here so the HTTP layer stays thin.

pub mod errors;
pub mod pagination;
pub mod validation;
pub mod token;
pub mod administrator;
pub mod vehicle;
#[cfg(test)]
pub mod test_support;
