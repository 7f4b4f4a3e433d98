use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

/// List the date directories under a subject's data directory.
///
/// A subdirectory qualifies only if its name is exactly eight digits
/// (YYYYMMDD); anything else is silently ignored. A missing directory yields
/// an empty list, not an error. Excluded dates are dropped during the walk;
/// the result is sorted ascending so iteration order is deterministic.
pub fn discover_dates(subject_dir: &Path, excluded: &HashSet<u32>) -> anyhow::Result<Vec<u32>> {
    let date_pattern = Regex::new(r"^\d{8}$")?;
    let mut dates = Vec::new();
    if !subject_dir.is_dir() {
        return Ok(dates);
    }
    for entry in std::fs::read_dir(subject_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !date_pattern.is_match(name) {
            continue;
        }
        let Ok(date) = name.parse::<u32>() else {
            continue;
        };
        if !excluded.contains(&date) {
            dates.push(date);
        }
    }
    dates.sort_unstable();
    Ok(dates)
}

/// Explicit non-empty date lists bypass discovery verbatim; the caller's
/// dates are trusted without existence validation. Exclusion for that path
/// is enforced again by the driver's gate.
pub fn resolve_dates(
    explicit: &[u32],
    subject_dir: &Path,
    excluded: &HashSet<u32>,
) -> anyhow::Result<Vec<u32>> {
    if !explicit.is_empty() {
        return Ok(explicit.to_vec());
    }
    discover_dates(subject_dir, excluded)
}
