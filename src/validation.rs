//! Input validation for the submission surface.
//!
//! The calculation engine accepts any finite numbers and never
//! validates. Every range and granularity rule is enforced here, on the
//! values as the user entered them in the selected unit, before a set is
//! built — checking the 0.25 grid after conversion would reject every
//! pound entry.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

use crate::units::PLATE_STEP;

/// Lowest accepted rep count.
pub const MIN_REPS: u8 = 1;

/// Highest accepted rep count.
pub const MAX_REPS: u8 = 50;

/// Highest accepted extra weight, in the entry unit.
pub const MAX_EXTRA_WEIGHT: Decimal = dec!(140);

/// Field-level validation failures
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("bodyweight must be greater than zero, got {0}")]
    NonPositiveBodyweight(Decimal),

    #[error("extra weight must be between 0 and 140, got {0}")]
    ExtraWeightOutOfRange(Decimal),

    #[error("extra weight must be a multiple of 0.25, got {0}")]
    ExtraWeightOffGrid(Decimal),

    #[error("reps must be between 1 and 50, got {0}")]
    RepsOutOfRange(u8),
}

/// Validate a full submission before the engine runs.
pub fn validate_submission(
    bodyweight: Decimal,
    extra_weight: Decimal,
    reps: u8,
) -> Result<(), ValidationError> {
    validate_bodyweight(bodyweight)?;
    validate_extra_weight(extra_weight)?;
    validate_reps(reps)?;
    Ok(())
}

pub fn validate_bodyweight(bodyweight: Decimal) -> Result<(), ValidationError> {
    if bodyweight <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveBodyweight(bodyweight));
    }
    Ok(())
}

pub fn validate_extra_weight(extra_weight: Decimal) -> Result<(), ValidationError> {
    if extra_weight < Decimal::ZERO || extra_weight > MAX_EXTRA_WEIGHT {
        return Err(ValidationError::ExtraWeightOutOfRange(extra_weight));
    }
    if extra_weight % PLATE_STEP != Decimal::ZERO {
        return Err(ValidationError::ExtraWeightOffGrid(extra_weight));
    }
    Ok(())
}

pub fn validate_reps(reps: u8) -> Result<(), ValidationError> {
    if !(MIN_REPS..=MAX_REPS).contains(&reps) {
        return Err(ValidationError::RepsOutOfRange(reps));
    }
    Ok(())
}
