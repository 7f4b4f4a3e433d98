use crate::*;

pub fn handle_report_commands(cli: &Cli, config: &ConfigFile) -> anyhow::Result<bool> {
    let Commands::Reports { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        ReportCommands::Sweep {
            output_dir,
            log_dir,
        } => {
            let store = OutputStore::new(
                output_dir.clone().unwrap_or_else(|| config.output_dir.clone()),
                log_dir.clone().unwrap_or_else(|| config.log_dir.clone()),
            );
            let moved = sweep_reports(&store, !cli.json)?;
            audit::record("report_sweep", serde_json::json!({"moved": moved}));
            print_one(cli.json, moved, |m| format!("moved {} reports", m))?;
        }
    }

    Ok(true)
}
