//! Kinematic calculations with eagerly evaluated results
//!
//! A [`Calculation`] is a closed sum over the two supported formulas. Each
//! variant validates its inputs on construction, stores the computed result
//! and never changes afterwards.

use crate::error::{CalcError, CalcResult};
use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;

//==============================================================================
// Calculation Kind
//==============================================================================

/// Selector for the formula to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationKind {
    /// a = v² / R
    CentripetalAcceleration,
    /// V = 2πR / T
    CircularVelocity,
}

impl CalculationKind {
    /// Parse the numeric menu selector (1 or 2)
    pub fn from_selector(selector: i64) -> CalcResult<Self> {
        match selector {
            1 => Ok(CalculationKind::CentripetalAcceleration),
            2 => Ok(CalculationKind::CircularVelocity),
            other => Err(CalcError::InvalidInput(format!(
                "Unknown calculation type {other}, choose 1 or 2"
            ))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CalculationKind::CentripetalAcceleration => "Centripetal acceleration",
            CalculationKind::CircularVelocity => "Circular velocity",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CalculationKind::CentripetalAcceleration => "a",
            CalculationKind::CircularVelocity => "V",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            CalculationKind::CentripetalAcceleration => "m/s²",
            CalculationKind::CircularVelocity => "m/s",
        }
    }

    /// Prompts for the two inputs, in the order [`CalculationKind::build`] takes them
    pub fn input_prompts(self) -> [&'static str; 2] {
        match self {
            CalculationKind::CentripetalAcceleration => {
                ["Enter speed V (m/s): ", "Enter radius R (m): "]
            }
            CalculationKind::CircularVelocity => ["Enter radius R (m): ", "Enter period T (s): "],
        }
    }

    /// Build a calculation of this kind from its two inputs
    pub fn build(self, first: f64, second: f64) -> CalcResult<Calculation> {
        match self {
            CalculationKind::CentripetalAcceleration => {
                CentripetalAcceleration::new(first, second).map(Calculation::from)
            }
            CalculationKind::CircularVelocity => {
                CircularVelocity::new(first, second).map(Calculation::from)
            }
        }
    }
}

//==============================================================================
// Variants
//==============================================================================

/// Centripetal acceleration a = v² / R
#[derive(Debug, Clone, Copy)]
pub struct CentripetalAcceleration {
    speed: f64,
    radius: f64,
    result: f64,
}

impl CentripetalAcceleration {
    /// Fails with [`CalcError::InvalidInput`] unless `radius > 0`
    pub fn new(speed: f64, radius: f64) -> CalcResult<Self> {
        if radius > 0.0 {
            Ok(Self {
                speed,
                radius,
                result: speed.powi(2) / radius,
            })
        } else {
            Err(CalcError::InvalidInput(
                "Radius must be a positive number!".to_string(),
            ))
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    /// Re-evaluate the formula from the stored inputs
    pub fn calculate(&self) -> f64 {
        self.speed.powi(2) / self.radius
    }
}

/// Circular velocity V = 2πR / T
#[derive(Debug, Clone, Copy)]
pub struct CircularVelocity {
    radius: f64,
    period: f64,
    result: f64,
}

impl CircularVelocity {
    /// Fails with [`CalcError::InvalidInput`] unless `period > 0`
    pub fn new(radius: f64, period: f64) -> CalcResult<Self> {
        if period > 0.0 {
            Ok(Self {
                radius,
                period,
                result: (2.0 * PI * radius) / period,
            })
        } else {
            Err(CalcError::InvalidInput(
                "Period must be a positive number!".to_string(),
            ))
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    /// Re-evaluate the formula from the stored inputs
    pub fn calculate(&self) -> f64 {
        (2.0 * PI * self.radius) / self.period
    }
}

//==============================================================================
// Calculation
//==============================================================================

/// One computed physical quantity together with the inputs that produced it
#[derive(Debug, Clone, Copy)]
pub enum Calculation {
    CentripetalAcceleration(CentripetalAcceleration),
    CircularVelocity(CircularVelocity),
}

impl Calculation {
    pub fn kind(&self) -> CalculationKind {
        match self {
            Calculation::CentripetalAcceleration(_) => CalculationKind::CentripetalAcceleration,
            Calculation::CircularVelocity(_) => CalculationKind::CircularVelocity,
        }
    }

    /// The result stored at construction time
    pub fn result(&self) -> f64 {
        match self {
            Calculation::CentripetalAcceleration(c) => c.result(),
            Calculation::CircularVelocity(c) => c.result(),
        }
    }

    pub fn calculate(&self) -> f64 {
        match self {
            Calculation::CentripetalAcceleration(c) => c.calculate(),
            Calculation::CircularVelocity(c) => c.calculate(),
        }
    }

    /// Order by result only, across variants
    ///
    /// Total order over `f64`: `-0.0` sorts before `0.0` and NaN after `+inf`.
    pub fn compare(&self, other: &Calculation) -> Ordering {
        self.result().total_cmp(&other.result())
    }

    /// Independent copy with the same variant, inputs and result
    #[must_use]
    pub fn duplicate(&self) -> Calculation {
        *self
    }
}

/// Same variant and numerically equal results
impl PartialEq for Calculation {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.result() == other.result()
    }
}

impl From<CentripetalAcceleration> for Calculation {
    fn from(value: CentripetalAcceleration) -> Self {
        Calculation::CentripetalAcceleration(value)
    }
}

impl From<CircularVelocity> for Calculation {
    fn from(value: CircularVelocity) -> Self {
        Calculation::CircularVelocity(value)
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind();
        write!(
            f,
            "{} {} = {:.3} {}",
            kind.name(),
            kind.symbol(),
            self.result(),
            kind.unit()
        )
    }
}
