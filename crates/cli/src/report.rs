//! Batch summary sidecar.
//!
//! After a batch run the driver drops a small `summary.json` next to the
//! solution files: the processed tally plus per-instance point and line
//! counts. Solution files stay the plain-text contract; the summary is the
//! machine-readable recap.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

/// One successfully processed instance.
#[derive(Clone, Debug, Serialize)]
pub struct InstanceReport {
    pub index: u32,
    pub points: usize,
    pub lines: usize,
}

/// Whole-batch recap.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BatchSummary {
    pub processed: u32,
    pub instances: Vec<InstanceReport>,
}

/// Write `summary.json` under `dir` and return its path.
pub fn write_summary(dir: &Path, summary: &BatchSummary) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating summary dir {}", dir.display()))?;
    let path = dir.join("summary.json");
    fs::write(&path, serde_json::to_vec_pretty(summary)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
