use crate::inventory::domain::SbomDocument;

/// SbomResponse - Internal response DTO from SBOM generation use case
///
/// Formatting is left to the adapters.
#[derive(Debug, Clone)]
pub struct SbomResponse {
    /// The assembled document
    pub document: SbomDocument,
    /// Number of distinct root archives that were scanned
    pub scanned_archives: usize,
}

impl SbomResponse {
    pub fn new(document: SbomDocument, scanned_archives: usize) -> Self {
        Self {
            document,
            scanned_archives,
        }
    }
}
