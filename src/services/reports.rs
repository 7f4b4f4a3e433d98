use crate::services::outputs::OutputStore;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Pick a destination that never clobbers an existing report: keep the
/// original name when free, otherwise insert a numeric suffix before the
/// extension (`name.1.txt`, `name.2.txt`, ...).
fn unique_destination(dir: &Path, name: &str) -> PathBuf {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return candidate;
    }
    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (name, None),
    };
    let mut n = 1u32;
    loop {
        let alt = match ext {
            Some(ext) => dir.join(format!("{}.{}.{}", stem, n, ext)),
            None => dir.join(format!("{}.{}", stem, n)),
        };
        if !alt.exists() {
            return alt;
        }
        n += 1;
    }
}

/// Move one conversion's inspector report out of the output directory.
///
/// A missing report is not an error; some conversions legitimately produce
/// none. Relocation problems are housekeeping, so they are reported but
/// never fail the conversion that triggered them.
pub fn relocate_report(store: &OutputStore, subject: &str, date: u32, progress: bool) {
    let name = OutputStore::report_name(subject, date);
    let src = store.report_path(subject, date);
    if !src.is_file() {
        if progress {
            println!("{} not found, nothing to move", name);
        }
        return;
    }
    if let Err(e) = move_report(&src, &store.log_dir, &name, progress) {
        if progress {
            println!("could not move {}: {:#}", name, e);
        }
    }
}

fn move_report(src: &Path, log_dir: &Path, name: &str, progress: bool) -> anyhow::Result<()> {
    std::fs::create_dir_all(log_dir)?;
    let dst = unique_destination(log_dir, name);
    std::fs::rename(src, &dst)?;
    crate::services::audit::record(
        "report_moved",
        serde_json::json!({"report": name, "to": dst.to_string_lossy()}),
    );
    if progress {
        println!("Moved {} to {}", src.display(), dst.display());
    }
    Ok(())
}

/// Scan the whole output directory and relocate every file matching the
/// inspector-report naming convention. A report that cannot be moved is
/// reported and left behind; the rest of the sweep still runs. Returns the
/// number actually moved.
pub fn sweep_reports(store: &OutputStore, progress: bool) -> anyhow::Result<usize> {
    let pattern = Regex::new(r"^\w+\d{8}_nwbinspector_report\.txt$")?;
    if !store.output_dir.is_dir() {
        return Ok(0);
    }
    let mut moved = 0usize;
    for entry in std::fs::read_dir(&store.output_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !pattern.is_match(name) {
            continue;
        }
        match move_report(&entry.path(), &store.log_dir, name, progress) {
            Ok(()) => moved += 1,
            Err(e) => {
                if progress {
                    println!("could not move {}: {:#}", name, e);
                }
            }
        }
    }
    Ok(moved)
}
