use std::collections::BTreeMap;
use std::fmt;

use crate::config::{Settings, DIMMED_WEIGHT, FULL_WEIGHT};
use crate::data::loader::BatchReport;
use crate::data::model::{Dataset, FitPoint};

// ---------------------------------------------------------------------------
// Series emphasis (legend hover)
// ---------------------------------------------------------------------------

/// The two series drawn in every scenario chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeriesKind {
    Score,
    Trend,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 2] = [SeriesKind::Score, SeriesKind::Trend];
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::Score => write!(f, "Score"),
            SeriesKind::Trend => write!(f, "Linear trend"),
        }
    }
}

/// Stroke weight per series, shared by all charts.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesEmphasis {
    weights: BTreeMap<SeriesKind, f32>,
}

impl Default for SeriesEmphasis {
    fn default() -> Self {
        Self {
            weights: SeriesKind::ALL.iter().map(|&k| (k, FULL_WEIGHT)).collect(),
        }
    }
}

impl SeriesEmphasis {
    /// Emphasise the hovered series by dimming every other one.
    /// `None` restores full weight everywhere.
    pub fn hover(&mut self, hovered: Option<SeriesKind>) {
        for (kind, weight) in self.weights.iter_mut() {
            *weight = match hovered {
                Some(h) if h != *kind => DIMMED_WEIGHT,
                _ => FULL_WEIGHT,
            };
        }
    }

    pub fn weight(&self, kind: SeriesKind) -> f32 {
        self.weights.get(&kind).copied().unwrap_or(FULL_WEIGHT)
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// A processed batch: the dataset and its trend values side by side.
#[derive(Debug, Clone)]
pub struct Batch {
    pub dataset: Dataset,
    /// `fits[i]` belongs to `dataset.groups()[i]`.
    pub fits: Vec<Vec<FitPoint>>,
}

impl Batch {
    pub fn new(dataset: Dataset) -> Self {
        let fits = dataset.fit_all();
        Self { dataset, fits }
    }
}

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Charts currently shown (None until a batch produced data).
    pub batch: Option<Batch>,

    /// Outcome of the most recent batch, including skipped files.
    pub report: Option<BatchReport>,

    pub emphasis: SeriesEmphasis,

    pub settings: Settings,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Publish a freshly built dataset.
    ///
    /// A non-empty dataset replaces the previous batch as a whole. An empty
    /// one leaves the current charts in place.
    pub fn apply_batch(&mut self, dataset: Dataset, report: BatchReport) {
        if dataset.is_empty() {
            self.status_message = Some(format!(
                "None of the {} selected files contained a score",
                report.considered
            ));
        } else {
            self.batch = Some(Batch::new(dataset));
            self.status_message = None;
        }
        self.report = Some(report);
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.batch.as_ref().map(|b| &b.dataset)
    }
}
