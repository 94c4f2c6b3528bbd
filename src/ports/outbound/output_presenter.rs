use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts where a formatted report (SBOM, fingerprint report,
/// record stream) ends up: stdout or a file.
pub trait OutputPresenter {
    /// Presents the formatted content
    ///
    /// # Arguments
    /// * `content` - The formatted content to present
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
