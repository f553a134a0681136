//! Reporting core: calendar enumeration, bucket aggregation, and the two
//! report builders (monthly request counts, daily garage availability).
//!
//! Builders are pure aside from the store calls; each report request is an
//! independent read with no shared mutable state.

pub mod aggregate;
pub mod calendar;
pub mod daily;
pub mod monthly;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;
