use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Extraction constants
// ---------------------------------------------------------------------------

/// Pattern of the score line inside an exported stats file. ASCII digits only.
pub const SCORE_PATTERN: &str = r"Score:,[0-9]+\.[0-9]+";

/// Separator between the field name and its value in a matched score line.
pub const SCORE_SEPARATOR: &str = ":,";

/// Separates the scenario name from the rest of a stats file name.
pub const SCENARIO_DELIMITER: &str = "- ";

/// Only the most recently supplied files of a batch are kept.
pub const LATEST_DATA_CUTOFF: usize = 20;

// ---------------------------------------------------------------------------
// Presentation constants
// ---------------------------------------------------------------------------

/// Stroke weight of a series nobody is pointing at.
pub const FULL_WEIGHT: f32 = 1.0;

/// Stroke weight of a series while another one is hovered in the legend.
pub const DIMMED_WEIGHT: f32 = 0.25;

/// Where the aim trainer writes its stats on a default Steam install.
pub const DEFAULT_WINDOWS_STATS_DIR: &str =
    "C:/Program Files (x86)/Steam/steamapps/common/FPSAimTrainer/FPSAimTrainer/stats";

pub const CUTOFF_ENV: &str = "AIM_TRENDS_CUTOFF";
pub const STATS_DIR_ENV: &str = "AIM_TRENDS_STATS_DIR";

// ---------------------------------------------------------------------------
// Runtime settings
// ---------------------------------------------------------------------------

/// Settings that may be overridden from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// How many of the most recent files a batch keeps.
    pub latest_cutoff: usize,
    /// Start directory of the file dialog.
    pub stats_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            latest_cutoff: LATEST_DATA_CUTOFF,
            stats_dir: None,
        }
    }
}

impl Settings {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// Invalid values are logged and replaced by the defaults. Without an
    /// explicit stats dir, the default install location is used if it exists.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(raw) = lookup(CUTOFF_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => settings.latest_cutoff = n,
                _ => log::warn!(
                    "Ignoring {CUTOFF_ENV}={raw:?}, keeping {}",
                    settings.latest_cutoff
                ),
            }
        }

        settings.stats_dir = match lookup(STATS_DIR_ENV) {
            Some(dir) if !dir.trim().is_empty() => Some(PathBuf::from(dir.trim())),
            _ => {
                let default = PathBuf::from(DEFAULT_WINDOWS_STATS_DIR);
                default.is_dir().then_some(default)
            }
        };

        settings
    }
}
