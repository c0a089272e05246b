/// ProgressReporter port for user-facing diagnostics
///
/// Generation runs inside build scripts, so reporters must never write to
/// stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a known number of steps
    ///
    /// # Arguments
    /// * `current` - Steps completed so far
    /// * `total` - Total number of steps
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
