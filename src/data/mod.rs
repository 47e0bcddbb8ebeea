/// Data layer: extraction, grouping, and trend fitting.
///
/// Architecture:
/// ```text
///  stats *.csv (newest last)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  keep last N files, read one at a time
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ extract   │  file name → scenario, "Score:,x.y" → value
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  scenario → observations, first-seen order
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ regression │  least-squares line per scenario
///   └────────────┘
/// ```

pub mod export;
pub mod extract;
pub mod loader;
pub mod model;
pub mod regression;
