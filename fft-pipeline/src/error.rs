//! Error taxonomy for the one recoverable boundary condition: asking the
//! registry for a stage it wasn't built to serve.

/// Errors returned at the [`crate::registry::StageFactory`] boundary.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    /// The requested stage exponent falls outside `[begin, end)`.
    #[error("stage {stage} is outside the configured range {begin}..{end}")]
    StageOutOfRange {
        stage: usize,
        begin: usize,
        end: usize,
    },
}
