use crate::inventory::domain::SbomDocument;
use crate::shared::Result;

/// SbomFormatter port for serializing an assembled document
///
/// This port abstracts the wire format the document is exported in.
pub trait SbomFormatter {
    /// Formats an SBOM document
    ///
    /// # Arguments
    /// * `document` - The assembled SBOM document
    ///
    /// # Returns
    /// Formatted SBOM content as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, document: &SbomDocument) -> Result<String>;
}
