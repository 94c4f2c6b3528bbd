use crate::application::dto::{SbomRequest, SbomResponse};
use crate::inventory::services::{ArchiveScanner, LibraryInventory, SbomAssembler};
use crate::ports::outbound::{ArchiveResolver, HostIdentityProvider, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// Resolves each requested root archive to its identity record, scans it
/// recursively and assembles the results into one document.
///
/// # Type Parameters
/// * `AR` - ArchiveResolver implementation
/// * `HI` - HostIdentityProvider implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<AR, HI, PR> {
    archive_resolver: AR,
    host_identity: HI,
    progress_reporter: PR,
}

impl<AR, HI, PR> GenerateSbomUseCase<AR, HI, PR>
where
    AR: ArchiveResolver,
    HI: HostIdentityProvider,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(archive_resolver: AR, host_identity: HI, progress_reporter: PR) -> Self {
        Self {
            archive_resolver,
            host_identity,
            progress_reporter,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// # Arguments
    /// * `request` - Root archives to scan
    ///
    /// # Returns
    /// SbomResponse containing the assembled document
    ///
    /// # Errors
    /// Returns an error if a requested root is missing or is not an archive.
    /// Problems inside an archive never fail the request.
    pub fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        let total = request.archives.len();
        self.progress_reporter
            .report(&format!("📦 Scanning {} archive(s)...", total));

        let mut inventory = LibraryInventory::new(ArchiveScanner::new());
        for (index, archive) in request.archives.iter().enumerate() {
            let locator = archive.to_string_lossy();
            let record = self
                .archive_resolver
                .resolve(&locator)
                .with_context(|| format!("Cannot inventory {}", archive.display()))?;

            inventory.add(&record);
            self.progress_reporter
                .report_progress(index + 1, total, Some(&locator));
        }

        let scanned_archives = inventory.examined_count();
        let (components, dependencies) = inventory.into_parts();
        self.progress_reporter.report_completion(&format!(
            "✅ Found {} component(s) in {} archive(s)",
            components.len(),
            scanned_archives
        ));

        let document =
            SbomAssembler::assemble(components, dependencies, self.host_identity.host_identity());
        Ok(SbomResponse::new(document, scanned_archives))
    }
}
