/// ProgressReporter port for reporting progress during a scan
///
/// Feedback goes to stderr so stdout stays reserved for report output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress over a known number of archives
    ///
    /// # Arguments
    /// * `current` - Archives processed so far
    /// * `total` - Total archives
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
