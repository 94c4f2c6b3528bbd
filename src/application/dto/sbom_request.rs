use std::path::PathBuf;

/// SbomRequest - Internal request DTO for SBOM generation use case
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Root archives to scan, in the order they should be reported
    pub archives: Vec<PathBuf>,
}

impl SbomRequest {
    pub fn new(archives: Vec<PathBuf>) -> Self {
        Self { archives }
    }
}
