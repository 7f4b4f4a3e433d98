use crate::domain::models::{BatchReport, JsonOut};
use serde::Serialize;

pub fn print_one<T: Serialize>(json: bool, data: T, row: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// End-of-batch summary for live runs. Text mode mirrors the historical
/// script output; JSON mode emits the whole report with `ok` reflecting
/// whether anything failed.
pub fn print_summary(json: bool, report: &BatchReport) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: report.failures.is_empty(),
                data: report
            })?
        );
        return Ok(());
    }

    println!();
    println!("SUMMARY");
    println!("--------------------------------");
    println!("Successfully converted:");
    for s in &report.successes {
        println!("{}", s);
    }
    println!("Failed to convert:");
    for f in &report.failures {
        println!("{}", f);
    }
    if !report.skipped.is_empty() {
        println!("Skipped:");
        for s in &report.skipped {
            println!("{}", s);
        }
    }
    Ok(())
}

/// Dry runs report what would be done and nothing else.
pub fn print_planned(json: bool, report: &BatchReport) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: &report.planned
            })?
        );
    } else {
        for line in &report.planned {
            println!("{}", line);
        }
    }
    Ok(())
}
