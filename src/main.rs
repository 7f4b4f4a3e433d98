use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use services::audit;
pub use services::config::{load_config, subject_data_dir};
pub use services::convert::{selection_expr, CommandConverter, ConvertError, ConvertRequest, Converter};
pub use services::discovery::{discover_dates, resolve_dates};
pub use services::driver::{run_batch, BatchContext};
pub use services::output::{print_one, print_planned, print_summary};
pub use services::outputs::OutputStore;
pub use services::reports::{relocate_report, sweep_reports};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        if cli.json {
            let out = ErrorOut {
                ok: false,
                error: ErrorBody {
                    code: error_code(&e).to_string(),
                    message: format!("{:#}", e),
                },
            };
            match serde_json::to_string_pretty(&out) {
                Ok(s) => println!("{}", s),
                Err(_) => eprintln!("error: {:#}", e),
            }
        } else {
            eprintln!("error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config()?;

    if handle_batch_commands(cli, &config)? {
        return Ok(());
    }
    if handle_report_commands(cli, &config)? {
        return Ok(());
    }
    Ok(())
}

fn error_code(e: &anyhow::Error) -> &'static str {
    if e.downcast_ref::<toml::de::Error>().is_some() {
        "CONFIG_PARSE"
    } else {
        "ERROR"
    }
}
