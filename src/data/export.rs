use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::model::Dataset;

/// One scenario as written to an export file.
#[derive(Debug, Serialize)]
pub struct ExportedScenario {
    pub name: String,
    pub scores: Vec<f64>,
    pub trend: Vec<f64>,
    /// Change of the trend line per run; absent for a flat single run.
    pub slope: Option<f64>,
}

/// Flatten a dataset into export records, in dataset order.
pub fn to_records(dataset: &Dataset) -> Vec<ExportedScenario> {
    dataset
        .groups()
        .iter()
        .map(|group| ExportedScenario {
            name: group.name.clone(),
            scores: group.scores(),
            trend: group.fit_points().iter().map(|p| p.fitted_value).collect(),
            slope: (group.len() > 1)
                .then(|| group.trend().map(|t| t.slope))
                .flatten(),
        })
        .collect()
}

/// Write the dataset and its trend lines as pretty-printed JSON.
pub fn export_json(dataset: &Dataset, path: &Path) -> Result<()> {
    let records = to_records(dataset);
    let json = serde_json::to_string_pretty(&records).context("serialising dataset")?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
