/// ProgressReporter port for user feedback on stderr
///
/// Keeps stdout free for the formatted documents.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a batch of documents
    ///
    /// # Arguments
    /// * `current` - Number of documents processed so far
    /// * `total` - Number of documents in the batch
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that does not stop processing
    fn report_warning(&self, message: &str);

    /// Reports an error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
