use std::path::{Path, PathBuf};

use super::extract::try_extract;
use super::model::Dataset;
use crate::error::SkipReason;

// ---------------------------------------------------------------------------
// Batch inputs and report
// ---------------------------------------------------------------------------

/// A stats file whose text has already been read.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A file that was left out of the dataset, and why.
#[derive(Debug)]
pub struct SkippedFile {
    pub name: String,
    pub reason: SkipReason,
}

/// What happened to the files of one batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files handed in, before the cutoff.
    pub considered: usize,
    /// Oldest files dropped to respect the cutoff.
    pub dropped_by_cutoff: usize,
    /// Files that produced an observation.
    pub accepted: usize,
    pub skipped: Vec<SkippedFile>,
}

impl BatchReport {
    fn skip(&mut self, name: String, reason: SkipReason) {
        log::debug!("Skipping {name}: {reason}");
        self.skipped.push(SkippedFile { name, reason });
    }
}

// ---------------------------------------------------------------------------
// Batch orchestration
// ---------------------------------------------------------------------------

/// Keep the last `cutoff` entries, in their original order.
///
/// The caller's order is taken as chronological; the newest file comes last.
pub fn latest<T>(mut files: Vec<T>, cutoff: usize) -> Vec<T> {
    if files.len() > cutoff {
        files.drain(..files.len() - cutoff);
    }
    files
}

/// Extract every file of a batch, in order, into a fresh dataset.
pub fn build_dataset<I>(files: I, cutoff: usize) -> (Dataset, BatchReport)
where
    I: IntoIterator<Item = SourceFile>,
{
    let files: Vec<SourceFile> = files.into_iter().collect();
    let mut report = BatchReport {
        considered: files.len(),
        ..Default::default()
    };

    let files = latest(files, cutoff);
    report.dropped_by_cutoff = report.considered - files.len();

    let mut dataset = Dataset::new();
    for file in files {
        match try_extract(&file.name, &file.text) {
            Ok(observation) => {
                report.accepted += 1;
                dataset.push(observation);
            }
            Err(reason) => report.skip(file.name, reason),
        }
    }

    log_summary(&dataset, &report);
    (dataset, report)
}

/// Read and extract stats files from disk, one at a time in list order.
///
/// The cutoff is applied to the path list before anything is read. A file
/// that cannot be read is skipped like any other unusable file.
pub fn load_paths(paths: &[PathBuf], cutoff: usize) -> (Dataset, BatchReport) {
    let mut report = BatchReport {
        considered: paths.len(),
        ..Default::default()
    };

    let paths = latest(paths.to_vec(), cutoff);
    report.dropped_by_cutoff = report.considered - paths.len();

    let mut dataset = Dataset::new();
    for path in &paths {
        let name = file_name(path);
        let text = match read_text(path) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Failed to read {}: {e}", path.display());
                report.skip(name, SkipReason::Read(e));
                continue;
            }
        };
        match try_extract(&name, &text) {
            Ok(observation) => {
                report.accepted += 1;
                dataset.push(observation);
            }
            Err(reason) => report.skip(name, reason),
        }
    }

    log_summary(&dataset, &report);
    (dataset, report)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Stats files are mostly ASCII; stray bytes must not lose the whole file.
fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn log_summary(dataset: &Dataset, report: &BatchReport) {
    log::info!(
        "Batch: {} files, {} dropped by cutoff, {} accepted, {} skipped, {} scenarios",
        report.considered,
        report.dropped_by_cutoff,
        report.accepted,
        report.skipped.len(),
        dataset.len()
    );
}
