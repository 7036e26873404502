/// Type alias for Result with anyhow::Error as the error type.
/// Typed failures are raised as `PipelineError` and converted at the `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
