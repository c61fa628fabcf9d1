use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::{debug, info};

use dipmax::config::AppConfig;
use dipmax::display;
use dipmax::error::DipMaxError;
use dipmax::estimator::RepMaxEstimator;
use dipmax::logging::{init_logging, LogConfig, LogFormat, LogLevel};
use dipmax::models::{DipSet, Unit};
use dipmax::report::DipReport;
use dipmax::units;
use dipmax::validation;

/// dipmax - Weighted-Dip Rep Max CLI
///
/// Estimates a one-rep-max for weighted dips from a performed set,
/// projects sub-maximal rep maxes, and places the result on a
/// strength-level ladder.
#[derive(Parser)]
#[command(name = "dipmax")]
#[command(author = "dipmax contributors")]
#[command(version = "0.1.0")]
#[command(about = "Weighted-dip rep max calculator", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a one-rep-max from a performed set
    Estimate {
        /// Bodyweight in the selected unit (defaults to the saved value)
        #[arg(short, long)]
        bodyweight: Option<Decimal>,

        /// Extra weight lifted beyond bodyweight
        #[arg(short = 'w', long)]
        extra_weight: Decimal,

        /// Repetitions performed
        #[arg(short, long)]
        reps: u8,

        /// Mass unit for input and display (kg or lb)
        #[arg(short, long)]
        unit: Option<Unit>,

        /// Output format (text, json)
        #[arg(short = 'f', long, default_value = "text")]
        format: String,
    },

    /// Project sub-maximal rep maxes from a known one-rep-max
    Table {
        /// Known one-rep-max in the selected unit
        #[arg(short, long)]
        one_rep_max: Decimal,

        /// Bodyweight in the selected unit (defaults to the saved value)
        #[arg(short, long)]
        bodyweight: Option<Decimal>,

        /// Mass unit for input and display (kg or lb)
        #[arg(short, long)]
        unit: Option<Unit>,
    },

    /// Display the strength-level ladder
    Levels {
        /// Mass unit for the thresholds (kg or lb)
        #[arg(short, long)]
        unit: Option<Unit>,
    },

    /// Manage persisted session defaults
    Config {
        /// List all persisted defaults
        #[arg(short, long)]
        list: bool,

        /// Set a default, as key=value
        #[arg(short, long)]
        set: Option<String>,

        /// Get a single default by key
        #[arg(short, long)]
        get: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LogConfig {
        level: LogLevel::from_verbosity(cli.verbose),
        format: LogFormat::Compact,
    })?;

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => AppConfig::default_path()?,
    };
    let mut config = AppConfig::load_from(&config_path)?;
    debug!(path = %config_path.display(), "configuration loaded");

    match cli.command {
        Commands::Estimate {
            bodyweight,
            extra_weight,
            reps,
            unit,
            format,
        } => {
            let unit = unit.unwrap_or(config.defaults.unit);
            let bodyweight = bodyweight.unwrap_or(config.defaults.bodyweight);

            validation::validate_submission(bodyweight, extra_weight, reps)
                .map_err(DipMaxError::from)?;

            let set = DipSet::from_input(bodyweight, extra_weight, reps, unit);
            let report = DipReport::generate(&set, unit);
            info!(one_rep_max_kg = %report.one_rep_max_kg, "estimate complete");

            match format.as_str() {
                "json" => {
                    let rendered =
                        serde_json::to_string_pretty(&report).map_err(DipMaxError::from)?;
                    println!("{}", rendered);
                }
                _ => display::print_report(&report),
            }

            // Successful submissions become the next run's defaults
            config.remember_submission(bodyweight, extra_weight, reps, unit);
            config.save_to(&config_path)?;
        }

        Commands::Table {
            one_rep_max,
            bodyweight,
            unit,
        } => {
            let unit = unit.unwrap_or(config.defaults.unit);
            let bodyweight = bodyweight.unwrap_or(config.defaults.bodyweight);

            validation::validate_bodyweight(bodyweight).map_err(DipMaxError::from)?;

            let one_rep_max_kg = units::to_canonical(one_rep_max, unit);
            let bodyweight_kg = units::to_canonical(bodyweight, unit);
            let table = RepMaxEstimator::rep_max_table(one_rep_max_kg, bodyweight_kg);

            println!(
                "{} {} {}",
                "Projections from a".bold(),
                format!("{} {}", one_rep_max.normalize(), unit).green().bold(),
                "one-rep-max".bold()
            );
            display::print_rep_max_table(&table, unit);
        }

        Commands::Levels { unit } => {
            let unit = unit.unwrap_or(config.defaults.unit);
            display::print_level_ladder(unit);
        }

        Commands::Config { list, set, get } => {
            if list || (set.is_none() && get.is_none()) {
                for key in ["unit", "bodyweight", "extra_weight", "reps"] {
                    // get_default covers every listed key
                    if let Some(value) = config.get_default(key) {
                        println!("{} = {}", key, value);
                    }
                }
            } else if let Some(assignment) = set {
                let (key, value) = assignment.split_once('=').ok_or_else(|| {
                    DipMaxError::Configuration(format!("Expected key=value, got: {}", assignment))
                })?;
                config
                    .set_default(key, value)
                    .map_err(DipMaxError::Configuration)?;
                config.save_to(&config_path)?;
                println!("{}", format!("✓ {} updated", key).green());
            } else if let Some(key) = get {
                let value = config
                    .get_default(&key)
                    .ok_or_else(|| DipMaxError::Configuration(format!("Unknown key: {}", key)))?;
                println!("{}", value);
            }
        }
    }

    Ok(())
}
