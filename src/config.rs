use crate::error::{FieldOpsError, Result};
use std::path::PathBuf;

pub const EXPORT_FILE_NAME: &str = "plantings.csv";

/// Resolve the directory the CSV export lands in. CLI override takes
/// priority, then the FIELDOPS_DATA_DIR environment variable, then the
/// platform data directory. The directory is created if missing.
pub fn data_dir(data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_dir_override {
        std::fs::create_dir_all(dir)?;
        return Ok(dir.clone());
    }

    if let Ok(dir) = std::env::var("FIELDOPS_DATA_DIR") {
        let p = PathBuf::from(dir);
        std::fs::create_dir_all(&p)?;
        return Ok(p);
    }

    let data_dir = dirs::data_dir()
        .ok_or_else(|| FieldOpsError::Config("Cannot determine data directory".into()))?
        .join("fieldops");

    std::fs::create_dir_all(&data_dir)?;
    Ok(data_dir)
}

pub fn export_path(data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
    Ok(data_dir(data_dir_override)?.join(EXPORT_FILE_NAME))
}
