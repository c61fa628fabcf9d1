//! Mass unit conversion and plate-precision rounding.
//!
//! The kilogram-to-pound factor is the fixed `2.2` the rest of the
//! outputs are calibrated against, not the exact 2.20462, and display
//! values are quantized to the 0.25 plate grid. A mass converted to the
//! other unit and back is therefore only guaranteed to land within one
//! quantization step of where it started.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::models::Unit;

/// Fixed kilogram-to-pound factor.
pub const LB_PER_KG: Decimal = dec!(2.2);

/// Smallest display increment: one pair of fractional plates.
pub const PLATE_STEP: Decimal = dec!(0.25);

/// Convert a kilogram mass to pounds.
pub fn to_lb(mass_kg: Decimal) -> Decimal {
    mass_kg * LB_PER_KG
}

/// Convert a pound mass to kilograms.
pub fn to_kg(mass_lb: Decimal) -> Decimal {
    mass_lb / LB_PER_KG
}

/// Round a mass to the nearest multiple of 0.25, ties away from zero.
pub fn round_to_plate(mass: Decimal) -> Decimal {
    (mass * dec!(4)).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) / dec!(4)
}

/// Normalize a user-entered mass in `unit` to canonical kilograms.
pub fn to_canonical(mass: Decimal, unit: Unit) -> Decimal {
    match unit {
        Unit::Kg => mass,
        Unit::Lb => to_kg(mass),
    }
}

/// Project a canonical mass for display in `unit`, quantized to plate
/// precision.
pub fn for_display(mass_kg: Decimal, unit: Unit) -> Decimal {
    match unit {
        Unit::Kg => round_to_plate(mass_kg),
        Unit::Lb => round_to_plate(to_lb(mass_kg)),
    }
}
