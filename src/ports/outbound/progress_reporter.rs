/// ProgressReporter port for reporting progress during an analysis
///
/// Progress goes to a side channel (stderr for the CLI) so that the report
/// itself can be piped.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a sequence of `total` items
    ///
    /// # Arguments
    /// * `current` - Number of items processed so far
    /// * `total` - Total number of items
    /// * `message` - Optional item description
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error message
    fn report_error(&self, message: &str);

    /// Reports a non-fatal problem; defaults to [`ProgressReporter::report_error`]
    fn report_warning(&self, message: &str) {
        self.report_error(message);
    }

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
