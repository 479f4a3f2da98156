use crate::shared::Result;

/// OutputPresenter port delivering a rendered report
///
/// The CLI picks stdout or a file; tests can capture the report in memory.
pub trait OutputPresenter {
    /// Delivers `content` unchanged to the destination
    ///
    /// # Errors
    /// Returns an error if the destination rejects the write, for example a
    /// missing parent directory or a symbolic link at the target path
    fn present(&self, content: &str) -> Result<()>;
}
