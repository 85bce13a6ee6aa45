/// Errors that can occur across the revlens toolkit.
///
/// Each variant wraps a specific failure domain. There is no retry or
/// recovery policy anywhere in the workspace: every failure is surfaced
/// unchanged to the caller.
///
/// # Examples
///
/// ```
/// use revlens_core::RevlensError;
///
/// let err = RevlensError::Record("empty contributor id".into());
/// assert!(err.to_string().contains("empty contributor id"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RevlensError {
    /// A timestamp string could not be parsed.
    #[error("invalid timestamp: {0}")]
    Timestamp(String),

    /// An input row violates the expected shape.
    #[error("malformed record: {0}")]
    Record(String),

    /// A statistic was requested over an unusable sample.
    #[error("statistics error: {0}")]
    Stats(String),

    /// Distribution fitting failure.
    #[error("fit error: {0}")]
    Fit(String),

    /// A search pattern could not be compiled.
    #[error("pattern error: {0}")]
    Pattern(String),

    /// JSON serialization / deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
