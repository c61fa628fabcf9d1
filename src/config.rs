//! Session defaults persisted between invocations.
//!
//! The engine holds no state. The CLI shell keeps the last submitted
//! selections here and feeds them back as defaults on the next run.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Unit;

/// Configuration format version
const CONFIG_VERSION: &str = "1.0";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration metadata
    pub metadata: ConfigMetadata,

    /// Persisted form selections
    pub defaults: SessionDefaults,
}

/// Configuration metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigMetadata {
    /// Configuration format version
    pub version: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// Form selections carried from one invocation to the next
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDefaults {
    /// Preferred display unit
    pub unit: Unit,

    /// Last bodyweight, in the preferred unit
    pub bodyweight: Decimal,

    /// Last extra weight, in the preferred unit
    pub extra_weight: Decimal,

    /// Last rep count
    pub reps: u8,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        // First-run form seed values
        Self {
            unit: Unit::Kg,
            bodyweight: dec!(70),
            extra_weight: dec!(20),
            reps: 6,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            metadata: ConfigMetadata {
                version: CONFIG_VERSION.to_string(),
                created_at: now,
                updated_at: now,
            },
            defaults: SessionDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Default configuration file location.
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine user config directory")?;
        Ok(base.join("dipmax").join("config.toml"))
    }

    /// Load from `path`, falling back to defaults when the file does not
    /// exist yet.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Record a submitted set as the new defaults.
    pub fn remember_submission(
        &mut self,
        bodyweight: Decimal,
        extra_weight: Decimal,
        reps: u8,
        unit: Unit,
    ) {
        self.defaults = SessionDefaults {
            unit,
            bodyweight,
            extra_weight,
            reps,
        };
        self.metadata.updated_at = Utc::now();
    }

    /// Set one persisted default by key. Keys: unit, bodyweight,
    /// extra_weight, reps.
    pub fn set_default(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "unit" => self.defaults.unit = value.parse()?,
            "bodyweight" => {
                self.defaults.bodyweight = value
                    .parse()
                    .map_err(|e| format!("Invalid bodyweight: {}", e))?;
            }
            "extra_weight" => {
                self.defaults.extra_weight = value
                    .parse()
                    .map_err(|e| format!("Invalid extra weight: {}", e))?;
            }
            "reps" => {
                self.defaults.reps = value.parse().map_err(|e| format!("Invalid reps: {}", e))?;
            }
            _ => return Err(format!("Unknown key: {}", key)),
        }
        self.metadata.updated_at = Utc::now();
        Ok(())
    }

    /// Read one persisted default by key.
    pub fn get_default(&self, key: &str) -> Option<String> {
        match key {
            "unit" => Some(self.defaults.unit.to_string()),
            "bodyweight" => Some(self.defaults.bodyweight.normalize().to_string()),
            "extra_weight" => Some(self.defaults.extra_weight.normalize().to_string()),
            "reps" => Some(self.defaults.reps.to_string()),
            _ => None,
        }
    }
}
