//! Operations over a sequence of calculations

use super::calculation::Calculation;
use crate::error::{CalcError, CalcResult};

/// Arithmetic mean of the stored results, regardless of variant mix
pub fn average(calculations: &[Calculation]) -> CalcResult<f64> {
    if calculations.is_empty() {
        return Err(CalcError::EmptyInput(
            "The list of calculations cannot be empty!".to_string(),
        ));
    }
    let sum: f64 = calculations.iter().map(Calculation::result).sum();
    Ok(sum / calculations.len() as f64)
}

/// Stable in-place sort by result; equal results keep their input order
pub fn sort_by_result(calculations: &mut [Calculation]) {
    calculations.sort_by(Calculation::compare);
}
