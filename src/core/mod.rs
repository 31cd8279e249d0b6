//! Calculation types and the operations over sequences of them

pub mod aggregate;
pub mod calculation;

pub use aggregate::{average, sort_by_result};
pub use calculation::{Calculation, CalculationKind, CentripetalAcceleration, CircularVelocity};
