//! Rep-max estimation for weighted dips.
//!
//! Epley-family linear model that treats bodyweight as part of the
//! lifted load: each rep is worth bodyweight/30 on top of the extra
//! weight. The divisor is a fixed empirical constant.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::DipSet;
use crate::units::round_to_plate;

/// Reps-to-load divisor of the estimation formula.
const REP_DIVISOR: Decimal = dec!(30);

/// Target rep counts for the derived rep-max table.
pub const TABLE_REPS: [u8; 4] = [3, 5, 7, 9];

/// One projected rep-max entry, canonical kilograms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepMaxEntry {
    /// Target rep count
    pub reps: u8,

    /// Projected extra weight for that count
    pub extra_weight_kg: Decimal,
}

impl RepMaxEntry {
    /// A non-positive projection means the lifter cannot add weight at
    /// this rep count; presentation suppresses such entries.
    pub fn is_achievable(&self) -> bool {
        self.extra_weight_kg > Decimal::ZERO
    }
}

/// Projected extra weight for each target rep count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepMaxTable {
    pub entries: Vec<RepMaxEntry>,
}

impl RepMaxTable {
    /// Entries meaningful for presentation.
    pub fn achievable(&self) -> impl Iterator<Item = &RepMaxEntry> {
        self.entries.iter().filter(|entry| entry.is_achievable())
    }
}

/// Core rep-max estimation engine
pub struct RepMaxEstimator;

impl RepMaxEstimator {
    /// Estimate the one-rep-max extra weight from a performed set.
    ///
    /// `round(extra + bodyweight * reps / 30)`, quantized to plate
    /// precision. A single-rep set still receives the bodyweight/30
    /// term; the formula applies uniformly across rep counts.
    pub fn one_rep_max(set: &DipSet) -> Decimal {
        round_to_plate(
            set.extra_weight_kg + set.bodyweight_kg * Decimal::from(set.reps) / REP_DIVISOR,
        )
    }

    /// Extra weight achievable for `reps` given a known one-rep-max.
    ///
    /// Algebraic inverse of [`Self::one_rep_max`] solved for extra
    /// weight at an arbitrary rep count. The result may be non-positive;
    /// no clamping happens here.
    pub fn extra_weight_for_reps(
        one_rep_max_kg: Decimal,
        bodyweight_kg: Decimal,
        reps: u8,
    ) -> Decimal {
        round_to_plate(one_rep_max_kg - bodyweight_kg * Decimal::from(reps) / REP_DIVISOR)
    }

    /// Build the sub-maximal projection table for the fixed target rep
    /// counts.
    pub fn rep_max_table(one_rep_max_kg: Decimal, bodyweight_kg: Decimal) -> RepMaxTable {
        let entries = TABLE_REPS
            .iter()
            .map(|&reps| RepMaxEntry {
                reps,
                extra_weight_kg: Self::extra_weight_for_reps(one_rep_max_kg, bodyweight_kg, reps),
            })
            .collect();

        RepMaxTable { entries }
    }
}
