//! Module defining the errors which are exposed to the users of the crate

/// Failures of a generator run. There is no retry or partial-output recovery:
/// the first error aborts the run and the output should be discarded.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writing a fixture file failed (permissions, disk)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A timestamp could not be rendered as ISO-8601
    #[error("timestamp formatting error: {0}")]
    TimeFormat(#[from] time::error::Format),
}
