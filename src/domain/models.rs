use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// One subject+date unit of conversion work. Identity is (subject, date);
/// each item is consumed exactly once by the batch driver.
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub subject: String,
    pub date: u32,
    pub dry_run: bool,
}

/// Outcome of one batch invocation, read once at the end of the run.
/// Entries are human-readable: `"<subject>, <date>"` for successes and
/// skips, `"<subject>, <date>: <error>"` for failures.
#[derive(Debug, Serialize, Default)]
pub struct BatchReport {
    pub subject: String,
    pub successes: Vec<String>,
    pub failures: Vec<String>,
    pub skipped: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub planned: Vec<String>,
}

fn default_data_root() -> String {
    "/data/raw".to_string()
}

fn default_output_dir() -> String {
    "/data/nwb/raw".to_string()
}

fn default_log_dir() -> String {
    "/data/nwb/nwbinspector_reports".to_string()
}

fn default_converter() -> String {
    "trodes-to-nwb".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "default_data_root")]
    pub data_root: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_converter")]
    pub converter: String,
    #[serde(default)]
    pub probe_metadata: Vec<String>,
    /// Per-subject overrides of `data_root`; the subject name is still
    /// appended to the chosen root.
    #[serde(default)]
    pub subject_roots: BTreeMap<String, String>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            output_dir: default_output_dir(),
            log_dir: default_log_dir(),
            converter: default_converter(),
            probe_metadata: Vec::new(),
            subject_roots: BTreeMap::new(),
        }
    }
}
