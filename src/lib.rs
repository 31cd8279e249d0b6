//! kinematic-calc - console calculator for uniform circular motion
//!
//! Computes centripetal acceleration (a = V²/R) or circular velocity
//! (V = 2πR/T), then sorts, duplicates and averages the results.
//!
//! # Example
//!
//! ```
//! use kinematic_calc::core::{average, sort_by_result, CalculationKind};
//!
//! let mut calcs = vec![
//!     CalculationKind::CentripetalAcceleration.build(10.0, 5.0)?,
//!     CalculationKind::CircularVelocity.build(3.0, 6.0)?,
//! ];
//! sort_by_result(&mut calcs);
//! assert_eq!(calcs[1].to_string(), "Centripetal acceleration a = 20.000 m/s²");
//!
//! let mean = average(&calcs)?;
//! assert!((mean - 11.5708).abs() < 1e-4);
//! # Ok::<(), kinematic_calc::error::CalcError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

// Re-export commonly used types
pub use crate::core::{Calculation, CalculationKind};
pub use error::{CalcError, CalcResult};
