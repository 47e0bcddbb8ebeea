use serde::Serialize;

use super::regression::{fit_line, TrendLine};

// ---------------------------------------------------------------------------
// Observation – one score taken from one stats file
// ---------------------------------------------------------------------------

/// A single score reading, keyed by the scenario it was played in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub group: String,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// FitPoint – one value of a trend line
// ---------------------------------------------------------------------------

/// Fitted trend value aligned with the observation at the same index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitPoint {
    pub fitted_value: f64,
}

// ---------------------------------------------------------------------------
// ScenarioGroup – all observations of one scenario, in arrival order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioGroup {
    pub name: String,
    pub observations: Vec<Observation>,
}

impl ScenarioGroup {
    fn new(first: Observation) -> Self {
        Self {
            name: first.group.clone(),
            observations: vec![first],
        }
    }

    /// Scores in arrival order.
    pub fn scores(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// Arrival positions `0..n`, the regression's independent variable.
    pub fn indices(&self) -> Vec<f64> {
        (0..self.observations.len()).map(|i| i as f64).collect()
    }

    /// Trend value for every observation; always as long as the group.
    pub fn fit_points(&self) -> Vec<FitPoint> {
        fit_line(&self.indices(), &self.scores())
            .into_iter()
            .map(|fitted_value| FitPoint { fitted_value })
            .collect()
    }

    /// The fitted line itself, for reporting the change per run.
    pub fn trend(&self) -> Option<TrendLine> {
        TrendLine::fit(&self.indices(), &self.scores())
    }

    /// Lowest and highest score, used as the chart's y domain.
    pub fn value_range(&self) -> (f64, f64) {
        self.observations
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), o| {
                (lo.min(o.value), hi.max(o.value))
            })
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }
}

// ---------------------------------------------------------------------------
// Dataset – every group of one batch
// ---------------------------------------------------------------------------

/// Observations grouped by scenario, ordered by first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    groups: Vec<ScenarioGroup>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the observation's group, creating it at the end if unseen.
    pub fn push(&mut self, observation: Observation) {
        match self
            .groups
            .iter_mut()
            .find(|g| g.name == observation.group)
        {
            Some(group) => group.observations.push(observation),
            None => self.groups.push(ScenarioGroup::new(observation)),
        }
    }

    pub fn groups(&self) -> &[ScenarioGroup] {
        &self.groups
    }

    pub fn get(&self, name: &str) -> Option<&ScenarioGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total observations across all groups.
    pub fn observation_count(&self) -> usize {
        self.groups.iter().map(ScenarioGroup::len).sum()
    }

    /// Trend values for every group, parallel to [`Dataset::groups`].
    pub fn fit_all(&self) -> Vec<Vec<FitPoint>> {
        self.groups.iter().map(ScenarioGroup::fit_points).collect()
    }
}

impl FromIterator<Observation> for Dataset {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        let mut dataset = Dataset::new();
        for observation in iter {
            dataset.push(observation);
        }
        dataset
    }
}
