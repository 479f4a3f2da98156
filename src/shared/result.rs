/// Type alias for Result with anyhow::Error as the error type.
///
/// Typed failures are raised as [`crate::shared::error::AnalyzerError`] and
/// can be recovered with `downcast_ref` where a caller needs to branch on them.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
