use crate::domain::models::ConfigFile;
use std::path::PathBuf;

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/nwbatch/config.toml");
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Resolve the directory holding a subject's date directories. Subjects
/// listed in `subject_roots` live under that root instead of `data_root`.
pub fn subject_data_dir(config: &ConfigFile, subject: &str) -> PathBuf {
    let root = config
        .subject_roots
        .get(subject)
        .unwrap_or(&config.data_root);
    PathBuf::from(root).join(subject)
}
