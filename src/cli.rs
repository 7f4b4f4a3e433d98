use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "nwbatch", version, about = "Raw-to-NWB batch conversion CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Run {
        subject: String,
        #[arg(
            long,
            num_args = 1..,
            value_name = "YYYYMMDD",
            help = "Explicit dates to convert; skips directory discovery"
        )]
        dates: Vec<u32>,
        #[arg(
            long,
            num_args = 1..,
            value_name = "YYYYMMDD",
            help = "Dates to exclude from conversion"
        )]
        excluded: Vec<u32>,
        #[arg(long, default_value_t = false)]
        dry_run: bool,
        #[arg(long, help = "Override the configured data root")]
        data_root: Option<String>,
        #[arg(long, help = "Override the configured output directory")]
        output_dir: Option<String>,
        #[arg(long, help = "Override the configured inspector-report directory")]
        log_dir: Option<String>,
        #[arg(long, help = "Override the configured converter executable")]
        converter: Option<String>,
    },
    Single {
        subject: String,
        #[arg(value_name = "YYYYMMDD")]
        date: u32,
        #[arg(long, help = "Directory holding this subject's date directories")]
        data_dir: Option<String>,
        #[arg(long, help = "Override the configured output directory")]
        output_dir: Option<String>,
        #[arg(long, help = "Override the configured inspector-report directory")]
        log_dir: Option<String>,
        #[arg(long, default_value_t = false)]
        dry_run: bool,
        #[arg(long, help = "Override the configured converter executable")]
        converter: Option<String>,
    },
    Reports {
        #[command(subcommand)]
        command: ReportCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    Sweep {
        #[arg(long, help = "Override the configured output directory")]
        output_dir: Option<String>,
        #[arg(long, help = "Override the configured inspector-report directory")]
        log_dir: Option<String>,
    },
}
