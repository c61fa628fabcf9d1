//! Terminal rendering for reports, rep-max tables, and the level ladder.

use colored::*;
use rust_decimal::Decimal;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::estimator::RepMaxTable;
use crate::levels::{level_increment, LEVEL_COUNT, LEVEL_NAMES};
use crate::models::Unit;
use crate::report::DipReport;
use crate::units;

/// Decimal formatted without trailing zeros.
fn fmt_mass(value: Decimal) -> String {
    value.normalize().to_string()
}

#[derive(Tabled)]
struct RepMaxRow {
    #[tabled(rename = "Reps")]
    reps: u8,

    #[tabled(rename = "Extra Weight")]
    extra_weight: String,
}

#[derive(Tabled)]
struct LevelRow {
    #[tabled(rename = "#")]
    index: usize,

    #[tabled(rename = "Level")]
    name: &'static str,

    #[tabled(rename = "From")]
    from: String,

    #[tabled(rename = "To")]
    to: String,
}

/// Print the full report for one submitted set.
pub fn print_report(report: &DipReport) {
    println!(
        "{} {} {}",
        "1RM:".bold(),
        fmt_mass(report.one_rep_max_display).green().bold(),
        report.unit.to_string().green().bold()
    );
    println!();

    let rows: Vec<RepMaxRow> = report
        .rep_maxes
        .iter()
        .filter(|projection| projection.is_achievable())
        .map(|projection| RepMaxRow {
            reps: projection.reps,
            extra_weight: format!(
                "{} {}",
                fmt_mass(projection.extra_weight_display),
                report.unit
            ),
        })
        .collect();

    if rows.is_empty() {
        println!(
            "{}",
            "No sub-maximal projections are achievable at this one-rep-max".dimmed()
        );
    } else {
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}", table);
    }

    println!();
    print_level_summary(report);
}

fn print_level_summary(report: &DipReport) {
    let level = &report.level;
    println!("{} {}", "Level:".bold(), level.name.cyan().bold());

    match level.next_threshold {
        Some(next) => println!("  Next tier at {} {}", fmt_mass(next), report.unit),
        None => println!("  {}", "Top of the ladder".yellow()),
    }

    let percent = (level.progress() * Decimal::from(100)).normalize();
    println!("  Progress: {}% ({}/{})", percent, level.index, LEVEL_COUNT);
}

/// Print a rep-max projection table for `unit`, suppressing entries that
/// are not achievable.
pub fn print_rep_max_table(table: &RepMaxTable, unit: Unit) {
    let rows: Vec<RepMaxRow> = table
        .achievable()
        .map(|entry| RepMaxRow {
            reps: entry.reps,
            extra_weight: format!(
                "{} {}",
                fmt_mass(units::for_display(entry.extra_weight_kg, unit)),
                unit
            ),
        })
        .collect();

    if rows.is_empty() {
        println!(
            "{}",
            "No sub-maximal projections are achievable at this one-rep-max".dimmed()
        );
        return;
    }

    let mut rendered = Table::new(rows);
    rendered.with(Style::rounded());
    println!("{}", rendered);
}

/// Print the full ladder with tier thresholds for `unit`.
pub fn print_level_ladder(unit: Unit) {
    let increment = level_increment(unit);

    let rows: Vec<LevelRow> = LEVEL_NAMES
        .iter()
        .enumerate()
        .map(|(index, &name)| LevelRow {
            index,
            name,
            from: format!("{} {}", fmt_mass(Decimal::from(index as u32) * increment), unit),
            to: format!(
                "{} {}",
                fmt_mass(Decimal::from(index as u32 + 1) * increment),
                unit
            ),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}
