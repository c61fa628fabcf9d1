// Library interface for dipmax modules
// This allows integration tests to access the calculation engine

pub mod config;
pub mod display;
pub mod error;
pub mod estimator;
pub mod levels;
pub mod logging;
pub mod models;
pub mod report;
pub mod units;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::{DipMaxError, Result};
pub use estimator::{RepMaxEntry, RepMaxEstimator, RepMaxTable, TABLE_REPS};
pub use levels::{level_increment, LevelClassifier, LevelResult, LEVEL_COUNT, LEVEL_NAMES};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{DipSet, Unit};
pub use report::{DipReport, RepMaxProjection};
