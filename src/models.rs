use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::units;

/// Mass units supported for input and display
///
/// All storage and formula arithmetic uses kilograms; pounds are a
/// display-only projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Unit {
    Kg,
    Lb,
}

impl Default for Unit {
    fn default() -> Self {
        Unit::Kg
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Kg => write!(f, "KG"),
            Unit::Lb => write!(f, "LB"),
        }
    }
}

impl std::str::FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(Unit::Kg),
            "lb" | "lbs" | "pound" | "pounds" => Ok(Unit::Lb),
            _ => Err(format!("Invalid unit: {}", s)),
        }
    }
}

/// One submitted dip set, normalized to canonical kilograms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DipSet {
    /// Lifter bodyweight in kilograms
    pub bodyweight_kg: Decimal,

    /// Extra weight lifted beyond bodyweight, in kilograms
    pub extra_weight_kg: Decimal,

    /// Repetitions performed
    pub reps: u8,
}

impl DipSet {
    /// Build a set from values entered in `unit`, normalizing masses to
    /// kilograms.
    pub fn from_input(bodyweight: Decimal, extra_weight: Decimal, reps: u8, unit: Unit) -> Self {
        Self {
            bodyweight_kg: units::to_canonical(bodyweight, unit),
            extra_weight_kg: units::to_canonical(extra_weight, unit),
            reps,
        }
    }
}
