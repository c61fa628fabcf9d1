//! Report assembly: the convert, estimate, classify pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::estimator::RepMaxEstimator;
use crate::levels::{LevelClassifier, LevelResult};
use crate::models::{DipSet, Unit};
use crate::units;

/// One rep-max table entry in canonical and display form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepMaxProjection {
    /// Target rep count
    pub reps: u8,

    /// Projected extra weight, canonical kilograms
    pub extra_weight_kg: Decimal,

    /// Projected extra weight in the display unit, plate-quantized
    pub extra_weight_display: Decimal,
}

impl RepMaxProjection {
    /// Non-positive projections are computed but not meaningful to show.
    pub fn is_achievable(&self) -> bool {
        self.extra_weight_kg > Decimal::ZERO
    }
}

/// Full result of one submitted set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DipReport {
    /// Display unit the report was generated for
    pub unit: Unit,

    /// Bodyweight used for the estimate, canonical kilograms
    pub bodyweight_kg: Decimal,

    /// Estimated one-rep-max, canonical kilograms
    pub one_rep_max_kg: Decimal,

    /// One-rep-max projected into the display unit
    pub one_rep_max_display: Decimal,

    /// Sub-maximal projections for the fixed target rep counts
    pub rep_maxes: Vec<RepMaxProjection>,

    /// Strength-level placement of the display-unit one-rep-max
    pub level: LevelResult,
}

impl DipReport {
    /// Run the full estimation pipeline for one submitted set.
    ///
    /// All three stages run from this single call, in order, so a report
    /// can never mix results from different submissions.
    pub fn generate(set: &DipSet, unit: Unit) -> DipReport {
        let one_rep_max_kg = RepMaxEstimator::one_rep_max(set);
        let one_rep_max_display = units::for_display(one_rep_max_kg, unit);

        let table = RepMaxEstimator::rep_max_table(one_rep_max_kg, set.bodyweight_kg);
        let rep_maxes = table
            .entries
            .into_iter()
            .map(|entry| RepMaxProjection {
                reps: entry.reps,
                extra_weight_kg: entry.extra_weight_kg,
                extra_weight_display: units::for_display(entry.extra_weight_kg, unit),
            })
            .collect();

        let level = LevelClassifier::classify(one_rep_max_display, unit);

        DipReport {
            unit,
            bodyweight_kg: set.bodyweight_kg,
            one_rep_max_kg,
            one_rep_max_display,
            rep_maxes,
            level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_kg_report_end_to_end() {
        let set = DipSet::from_input(dec!(70), dec!(25), 6, Unit::Kg);
        let report = DipReport::generate(&set, Unit::Kg);

        assert_eq!(report.one_rep_max_kg, dec!(39));
        assert_eq!(report.one_rep_max_display, dec!(39));
        assert_eq!(report.level.name, "Vanguard");
        assert_eq!(report.level.index, 7);
        assert_eq!(report.level.next_threshold, Some(dec!(40)));

        // 39 - 70 * {3,5,7,9} / 30
        let display: Vec<Decimal> = report
            .rep_maxes
            .iter()
            .map(|p| p.extra_weight_display)
            .collect();
        assert_eq!(display, vec![dec!(32), dec!(27.25), dec!(22.75), dec!(18)]);
    }

    #[test]
    fn test_lb_report_classifies_on_display_value() {
        // Entered in pounds: 154 lb bodyweight, 55 lb extra, 6 reps.
        // Canonical 1RM is 39 kg; displayed as 85.75 lb; classified with
        // the 10 lb tier width.
        let set = DipSet::from_input(dec!(154), dec!(55), 6, Unit::Lb);
        let report = DipReport::generate(&set, Unit::Lb);

        assert_eq!(report.one_rep_max_kg, dec!(39));
        assert_eq!(report.one_rep_max_display, dec!(85.75));
        assert_eq!(report.level.index, 8);
        assert_eq!(report.level.name, "Warrior");
        assert_eq!(report.level.next_threshold, Some(dec!(90)));
    }

    #[test]
    fn test_report_keeps_unachievable_entries_for_the_view_to_drop() {
        // Light 1RM relative to bodyweight: deeper rep counts go
        // non-positive but stay in the report
        let set = DipSet {
            bodyweight_kg: dec!(90),
            extra_weight_kg: dec!(1),
            reps: 2,
        };
        let report = DipReport::generate(&set, Unit::Kg);

        assert_eq!(report.rep_maxes.len(), 4);
        assert!(report.rep_maxes.iter().any(|p| !p.is_achievable()));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let set = DipSet::from_input(dec!(70), dec!(25), 6, Unit::Kg);
        let report = DipReport::generate(&set, Unit::Kg);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"unit\":\"KG\""));
        assert!(json.contains("\"name\":\"Vanguard\""));

        let back: DipReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
