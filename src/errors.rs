use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManualJError {
    #[error("Request was considered invalid due to error: {0}")]
    InvalidRequest(#[from] anyhow::Error),
    #[error("Error writing calculation report: {0}")]
    FailureInReporting(#[from] ReportError),
}

/// An error raised while writing report artifacts. The calculation itself is
/// total and cannot fail; only the surrounding I/O can.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ReportError {
    error: anyhow::Error,
}

impl ReportError {
    pub(crate) fn new(error: anyhow::Error) -> Self {
        Self { error }
    }
}
