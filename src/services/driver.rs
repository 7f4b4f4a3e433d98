use crate::domain::models::{BatchReport, WorkItem};
use crate::services::audit;
use crate::services::convert::{ConvertRequest, Converter, selection_expr};
use crate::services::outputs::OutputStore;
use crate::services::reports::relocate_report;
use std::collections::HashSet;
use std::path::PathBuf;

pub struct BatchContext<'a> {
    pub converter: &'a dyn Converter,
    pub store: &'a OutputStore,
    /// The subject's data directory passed through to the converter.
    pub data_dir: PathBuf,
    /// Re-checked per item, independently of discovery's own filtering, so
    /// an excluded date can never reach the converter from either path.
    pub excluded: HashSet<u32>,
    pub probe_metadata: Vec<String>,
    /// Per-item progress lines on stdout; disabled for `--json` runs.
    pub progress: bool,
}

/// Process the work items strictly in order, one at a time.
///
/// Each item resolves to exactly one of skipped, success, or failure. A
/// failing conversion is recorded and the loop moves on; one bad recording
/// must not prevent conversion of the rest.
pub fn run_batch(items: &[WorkItem], ctx: &BatchContext) -> BatchReport {
    let mut report = BatchReport::default();
    if let Some(first) = items.first() {
        report.subject = first.subject.clone();
    }

    for item in items {
        let label = format!("{}, {}", item.subject, item.date);

        if ctx.excluded.contains(&item.date) || ctx.store.has_output(&item.subject, item.date) {
            if ctx.progress {
                println!("Skipping date {}", item.date);
            }
            if !item.dry_run {
                audit::record(
                    "skip",
                    serde_json::json!({"subject": item.subject, "date": item.date}),
                );
            }
            report.skipped.push(label);
            continue;
        }

        let query = selection_expr(&item.subject, item.date);
        if item.dry_run {
            report.planned.push(format!(
                "{} -> {}",
                query,
                ctx.store.output_path(&item.subject, item.date).display()
            ));
            continue;
        }

        if ctx.progress {
            println!("Converting {}", query);
        }
        let req = ConvertRequest {
            data_dir: ctx.data_dir.clone(),
            output_dir: ctx.store.output_dir.clone(),
            query,
            probe_metadata: ctx.probe_metadata.clone(),
        };
        match ctx.converter.convert(&req) {
            Ok(()) => {
                audit::record(
                    "convert_ok",
                    serde_json::json!({"subject": item.subject, "date": item.date}),
                );
                report.successes.push(label);
                relocate_report(ctx.store, &item.subject, item.date, ctx.progress);
            }
            Err(e) => {
                if ctx.progress {
                    println!("{}", e);
                }
                audit::record(
                    "convert_fail",
                    serde_json::json!({
                        "subject": item.subject,
                        "date": item.date,
                        "error": e.to_string()
                    }),
                );
                report.failures.push(format!("{}: {}", label, e));
            }
        }
    }

    report
}
