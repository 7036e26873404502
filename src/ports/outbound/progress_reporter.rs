/// ProgressReporter port for run diagnostics
///
/// All progress and per-item failure messages flow through this port, so
/// use cases never print directly.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a sequence of items
    ///
    /// # Arguments
    /// * `current` - Number of items processed so far
    /// * `total` - Total number of items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a failure that was isolated to one item
    fn report_error(&self, message: &str);

    /// Reports completion of a pipeline
    fn report_completion(&self, message: &str);
}
