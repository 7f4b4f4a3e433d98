use crate::*;
use std::collections::HashSet;
use std::path::PathBuf;

pub fn handle_batch_commands(cli: &Cli, config: &ConfigFile) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Run {
            subject,
            dates,
            excluded,
            dry_run,
            data_root,
            output_dir,
            log_dir,
            converter,
        } => {
            let data_dir = match data_root {
                Some(root) => PathBuf::from(root).join(subject),
                None => subject_data_dir(config, subject),
            };
            let excluded: HashSet<u32> = excluded.iter().copied().collect();
            let dates = resolve_dates(dates, &data_dir, &excluded)?;
            let items: Vec<WorkItem> = dates
                .iter()
                .map(|d| WorkItem {
                    subject: subject.clone(),
                    date: *d,
                    dry_run: *dry_run,
                })
                .collect();
            run_and_report(
                cli, config, items, *dry_run, data_dir, excluded, output_dir, log_dir, converter,
            )?;
            Ok(true)
        }
        Commands::Single {
            subject,
            date,
            data_dir,
            output_dir,
            log_dir,
            dry_run,
            converter,
        } => {
            let data_dir = match data_dir {
                Some(dir) => PathBuf::from(dir),
                None => subject_data_dir(config, subject),
            };
            let items = vec![WorkItem {
                subject: subject.clone(),
                date: *date,
                dry_run: *dry_run,
            }];
            run_and_report(
                cli,
                config,
                items,
                *dry_run,
                data_dir,
                HashSet::new(),
                output_dir,
                log_dir,
                converter,
            )?;
            Ok(true)
        }
        Commands::Reports { .. } => Ok(false),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_and_report(
    cli: &Cli,
    config: &ConfigFile,
    items: Vec<WorkItem>,
    dry_run: bool,
    data_dir: PathBuf,
    excluded: HashSet<u32>,
    output_dir: &Option<String>,
    log_dir: &Option<String>,
    converter: &Option<String>,
) -> anyhow::Result<()> {
    let store = OutputStore::new(
        output_dir.clone().unwrap_or_else(|| config.output_dir.clone()),
        log_dir.clone().unwrap_or_else(|| config.log_dir.clone()),
    );
    let converter = CommandConverter {
        program: converter.clone().unwrap_or_else(|| config.converter.clone()),
    };

    // Dry runs mutate nothing, the audit trail included.
    if !dry_run {
        audit::record(
            "run_start",
            serde_json::json!({
                "subject": items.first().map(|i| i.subject.clone()).unwrap_or_default(),
                "candidates": items.len(),
                "dry_run": dry_run
            }),
        );
    }

    let ctx = BatchContext {
        converter: &converter,
        store: &store,
        data_dir,
        excluded,
        probe_metadata: config.probe_metadata.clone(),
        progress: !cli.json,
    };
    let report = run_batch(&items, &ctx);

    if dry_run {
        return print_planned(cli.json, &report);
    }
    print_summary(cli.json, &report)?;
    if !report.failures.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
