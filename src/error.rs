use thiserror::Error;

/// Why a stats file produced no observation.
///
/// None of these abort a batch; the file is left out and the reason is
/// reported next to the charts.
#[derive(Error, Debug)]
pub enum SkipReason {
    #[error("file name has no \"- \" scenario delimiter")]
    MissingDelimiter,

    #[error("scenario name before the delimiter is empty")]
    EmptyScenario,

    #[error("no \"Score:,<number>\" line found")]
    MissingScore,

    #[error("malformed score field: {0}")]
    MalformedScore(String),

    #[error("could not read file: {0}")]
    Read(#[from] std::io::Error),
}
