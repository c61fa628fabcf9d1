use rust_decimal_macros::dec;

use dipmax::config::AppConfig;
use dipmax::estimator::RepMaxEstimator;
use dipmax::levels::LevelClassifier;
use dipmax::models::{DipSet, Unit};
use dipmax::report::DipReport;
use dipmax::validation;

/// Integration tests that exercise the complete submission workflows

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn submitted_set() -> DipSet {
        DipSet::from_input(dec!(70), dec!(25), 6, Unit::Kg)
    }

    /// Full validated-submission pipeline in kilograms
    #[test]
    fn test_complete_kg_submission_workflow() {
        let bodyweight = dec!(70);
        let extra_weight = dec!(25);
        let reps = 6;

        assert!(validation::validate_submission(bodyweight, extra_weight, reps).is_ok());

        let set = DipSet::from_input(bodyweight, extra_weight, reps, Unit::Kg);
        let report = DipReport::generate(&set, Unit::Kg);

        assert_eq!(report.one_rep_max_kg, dec!(39));
        assert_eq!(report.one_rep_max_display, dec!(39));
        assert_eq!(report.level.name, "Vanguard");
        assert_eq!(report.level.index, 7);
        assert_eq!(report.level.next_threshold, Some(dec!(40)));
        assert_eq!(report.level.progress(), dec!(0.35));
    }

    /// Pound entry normalizes to kilograms for computation and
    /// classifies on the pound display value with the 10 lb tier width
    #[test]
    fn test_complete_lb_submission_workflow() {
        let set = DipSet::from_input(dec!(154), dec!(55), 6, Unit::Lb);
        let report = DipReport::generate(&set, Unit::Lb);

        assert_eq!(report.one_rep_max_kg, dec!(39));
        assert_eq!(report.one_rep_max_display, dec!(85.75));
        assert_eq!(report.level.index, 8);
        assert_eq!(report.level.name, "Warrior");

        // Same mass viewed in kilograms lands a tier lower
        let kg_view = LevelClassifier::classify(report.one_rep_max_kg, Unit::Kg);
        assert_eq!(kg_view.index, 7);
    }

    /// The rep-max table keeps raw projections; presentation filtering
    /// drops the non-positive ones
    #[test]
    fn test_rep_max_table_suppression() {
        let table = RepMaxEstimator::rep_max_table(dec!(10), dec!(90));

        assert_eq!(table.entries.len(), 4);
        let shown: Vec<u8> = table.achievable().map(|entry| entry.reps).collect();
        assert_eq!(shown, vec![3]);
    }

    /// Rejected input never reaches the engine
    #[test]
    fn test_validation_gates_the_engine() {
        assert!(validation::validate_submission(dec!(0), dec!(25), 6).is_err());
        assert!(validation::validate_submission(dec!(70), dec!(150), 6).is_err());
        assert!(validation::validate_submission(dec!(70), dec!(25.1), 6).is_err());
        assert!(validation::validate_submission(dec!(70), dec!(25), 0).is_err());
        assert!(validation::validate_submission(dec!(70), dec!(25), 51).is_err());
    }

    /// JSON report shape consumed by external callers
    #[test]
    fn test_report_json_shape() {
        let report = DipReport::generate(&submitted_set(), Unit::Kg);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["unit"], "KG");
        assert_eq!(json["level"]["name"], "Vanguard");
        assert_eq!(json["level"]["index"], 7);
        assert!(json["level"]["next_threshold"].is_string());
        assert_eq!(json["rep_maxes"].as_array().unwrap().len(), 4);

        // Past the top of the ladder the next threshold serializes null
        let strong = DipSet::from_input(dec!(100), dec!(120), 20, Unit::Kg);
        let report = DipReport::generate(&strong, Unit::Kg);
        assert!(report.level.is_at_max());
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["level"]["next_threshold"].is_null());
    }

    /// Session defaults persist across shell invocations
    #[test]
    fn test_session_defaults_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        // First run: nothing saved yet, seeded defaults apply
        let mut config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.defaults.unit, Unit::Kg);
        assert_eq!(config.defaults.bodyweight, dec!(70));

        // A successful submission becomes the next run's defaults
        config.remember_submission(dec!(176), dec!(44), 8, Unit::Lb);
        config.save_to(&path).unwrap();

        let next_run = AppConfig::load_from(&path).unwrap();
        assert_eq!(next_run.defaults.unit, Unit::Lb);
        assert_eq!(next_run.defaults.bodyweight, dec!(176));
        assert_eq!(next_run.defaults.extra_weight, dec!(44));
        assert_eq!(next_run.defaults.reps, 8);

        // And feed straight back into the pipeline
        let set = DipSet::from_input(
            next_run.defaults.bodyweight,
            next_run.defaults.extra_weight,
            next_run.defaults.reps,
            next_run.defaults.unit,
        );
        let report = DipReport::generate(&set, next_run.defaults.unit);
        assert_eq!(set.bodyweight_kg, dec!(80)); // 176 / 2.2
        assert_eq!(set.extra_weight_kg, dec!(20)); // 44 / 2.2
        assert_eq!(report.one_rep_max_kg, dec!(41.25)); // 20 + 80 * 8 / 30
    }

    /// Recomputation is wholesale per submission; two sets never blend
    #[test]
    fn test_reports_are_independent_per_submission() {
        let first = DipReport::generate(&submitted_set(), Unit::Kg);

        let heavier = DipSet::from_input(dec!(70), dec!(30), 6, Unit::Kg);
        let second = DipReport::generate(&heavier, Unit::Kg);

        assert_eq!(first.one_rep_max_kg, dec!(39));
        assert_eq!(second.one_rep_max_kg, dec!(44));
        assert_ne!(first, second);
    }
}
