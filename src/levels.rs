//! Strength-level classification for an estimated one-rep-max.
//!
//! The ladder is a fixed sequence of 20 named tiers with a constant
//! width per display unit. Classification consumes the display-unit
//! value, so the same underlying mass can land on different tiers
//! depending on the unit the lifter views it in.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::Unit;

/// Ordered tier names, weakest first.
pub const LEVEL_NAMES: [&str; 20] = [
    "Featherweight",
    "Novice",
    "Apprentice",
    "Initiate",
    "Contender",
    "Challenger",
    "Gladiator",
    "Vanguard",
    "Warrior",
    "Champion",
    "Elite",
    "Veteran",
    "Master",
    "Grandmaster",
    "Dominator",
    "Titan",
    "Juggernaut",
    "Colossus",
    "Mythic",
    "Legendary",
];

/// Number of named tiers on the ladder.
pub const LEVEL_COUNT: usize = LEVEL_NAMES.len();

/// Tier width for a display unit.
///
/// The widths are defined per unit directly (5 kg, 10 lb), not derived
/// from one another through conversion.
pub fn level_increment(unit: Unit) -> Decimal {
    match unit {
        Unit::Kg => dec!(5),
        Unit::Lb => dec!(10),
    }
}

/// Placement of a one-rep-max on the ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelResult {
    /// Tier name; stays at the final name past the ladder
    pub name: String,

    /// Tier index, 0 through [`LEVEL_COUNT`]; the value `LEVEL_COUNT`
    /// marks a one-rep-max beyond the last threshold
    pub index: usize,

    /// Mass at which the next tier starts, `None` at the top
    pub next_threshold: Option<Decimal>,
}

impl LevelResult {
    /// Fraction of the ladder climbed, for progress indicators.
    pub fn progress(&self) -> Decimal {
        Decimal::from(self.index as u32) / Decimal::from(LEVEL_COUNT as u32)
    }

    /// Whether the one-rep-max is past the final threshold.
    pub fn is_at_max(&self) -> bool {
        self.next_threshold.is_none()
    }
}

/// Level lookup over the fixed ladder
pub struct LevelClassifier;

impl LevelClassifier {
    /// Classify a one-rep-max expressed in `unit` display values.
    ///
    /// `index = floor(value / increment)`. Values past the ladder keep
    /// the final name with `index == LEVEL_COUNT` and no next threshold;
    /// a value of zero lands on tier 0.
    pub fn classify(one_rep_max: Decimal, unit: Unit) -> LevelResult {
        let increment = level_increment(unit);
        let index = (one_rep_max / increment).floor().to_usize().unwrap_or(0);

        if index >= LEVEL_COUNT {
            LevelResult {
                name: LEVEL_NAMES[LEVEL_COUNT - 1].to_string(),
                index: LEVEL_COUNT,
                next_threshold: None,
            }
        } else {
            LevelResult {
                name: LEVEL_NAMES[index].to_string(),
                index,
                next_threshold: Some(Decimal::from(index as u32 + 1) * increment),
            }
        }
    }
}
