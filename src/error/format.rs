use thiserror::Error;

/// Errors raised while rendering a metric for display.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// A zero count has no binary logarithm.
    #[error("Cannot format a zero count: log2(0) is undefined")]
    ZeroCount,
}
