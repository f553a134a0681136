//! Service layer providing business-oriented operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Hosts the reporting core (calendar enumeration, aggregation, builders).

pub mod errors;
pub mod garage_service;
pub mod car_service;
pub mod maintenance_service;
pub mod reports;
#[cfg(test)]
pub mod test_support;
