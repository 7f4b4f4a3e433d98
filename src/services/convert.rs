use std::path::PathBuf;
use std::process::Command;

/// Everything the external converter needs for one invocation.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub query: String,
    pub probe_metadata: Vec<String>,
}

/// Scoping predicate passed to the converter, restricting it to exactly one
/// subject and date.
pub fn selection_expr(subject: &str, date: u32) -> String {
    format!("subject == '{}' and date == {}", subject, date)
}

#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("failed to launch converter {0}: {1}")]
    Launch(String, #[source] std::io::Error),
    #[error("{0}")]
    Failed(String),
}

/// The external-operation seam. Production code drives a real converter
/// process; tests substitute a recording mock.
pub trait Converter {
    fn convert(&self, req: &ConvertRequest) -> Result<(), ConvertError>;
}

/// Runs the configured converter executable synchronously, with no timeout
/// and no retry. A hang in the converter hangs the batch.
pub struct CommandConverter {
    pub program: String,
}

impl Converter for CommandConverter {
    fn convert(&self, req: &ConvertRequest) -> Result<(), ConvertError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--path")
            .arg(&req.data_dir)
            .arg("--output-dir")
            .arg(&req.output_dir)
            .arg("--query")
            .arg(&req.query);
        for p in &req.probe_metadata {
            cmd.arg("--probe-metadata").arg(p);
        }

        let out = cmd
            .output()
            .map_err(|e| ConvertError::Launch(self.program.clone(), e))?;
        if out.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&out.stderr);
        let message = stderr.trim().lines().last().unwrap_or("").trim().to_string();
        if message.is_empty() {
            Err(ConvertError::Failed(format!(
                "converter exited with {}",
                out.status
            )))
        } else {
            Err(ConvertError::Failed(message))
        }
    }
}
