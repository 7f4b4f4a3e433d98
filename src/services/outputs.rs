use std::path::PathBuf;

/// Filesystem layout of converted artifacts and their inspector reports.
///
/// The presence of `<output_dir>/<subject><date>.nwb` is the only persisted
/// "already converted" state; there is no separate index. A truncated prior
/// output is indistinguishable from a complete one, so it still counts as
/// converted. Swapping this struct for a real manifest would not touch the
/// batch driver.
pub struct OutputStore {
    pub output_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl OutputStore {
    pub fn new(output_dir: impl Into<PathBuf>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            log_dir: log_dir.into(),
        }
    }

    pub fn output_path(&self, subject: &str, date: u32) -> PathBuf {
        self.output_dir.join(format!("{}{}.nwb", subject, date))
    }

    pub fn has_output(&self, subject: &str, date: u32) -> bool {
        self.output_path(subject, date).is_file()
    }

    pub fn report_name(subject: &str, date: u32) -> String {
        format!("{}{}_nwbinspector_report.txt", subject, date)
    }

    pub fn report_path(&self, subject: &str, date: u32) -> PathBuf {
        self.output_dir.join(Self::report_name(subject, date))
    }
}
