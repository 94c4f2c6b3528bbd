//! runtime-inventory - library inventory for running JVM workloads
//!
//! Records which archives a process loads (deduplicated by content hash),
//! guesses what kind of workload it is, and turns the archives into a
//! CycloneDX-style SBOM by scanning them recursively.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Inventory** (`inventory`): domain model, scanning and fingerprinting services
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for the host and infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use runtime_inventory::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateSbomUseCase::new(
//!     ArchiveIdentityResolver::new(),
//!     SystemHostIdentity::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = SbomRequest::new(vec![PathBuf::from("app.war")]);
//! let response = use_case.execute(request)?;
//!
//! let output = CycloneDxFormatter::new().format(&response.document)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod inventory;
pub mod logging;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, JBossModuleSystem, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::CycloneDxFormatter;
    pub use crate::adapters::outbound::host::SystemHostIdentity;
    pub use crate::adapters::outbound::queue::{ChannelQueue, RecordReceiver};
    pub use crate::adapters::outbound::runtime::ClasspathProbe;
    pub use crate::application::dto::{DeploymentContext, SbomRequest, SbomResponse, WorkloadReport};
    pub use crate::application::use_cases::{
        GenerateSbomUseCase, IdentifyWorkloadUseCase, TrackLoadEventsUseCase,
    };
    pub use crate::inventory::domain::{
        ArchiveRecord, DependencyEdge, HostIdentity, LibraryComponent, Marker, ProductDescriptor,
        SbomDocument, WorkloadFingerprint,
    };
    pub use crate::inventory::policies::{ExtractionStrategy, MarkerRegistry};
    pub use crate::inventory::services::{
        ArchiveIdentityResolver, ArchiveScanner, LibraryInventory, LoadEventDeduplicator,
        LoadOutcome, PollSettings, SbomAssembler, WorkloadFingerprintResolver,
    };
    pub use crate::ports::inbound::LoadEventHook;
    pub use crate::ports::outbound::{
        ArchiveResolver, HostIdentityProvider, ModuleSystem, OutputPresenter, ProgressReporter,
        RecordSink, RuntimeProbe, SbomFormatter,
    };
    pub use crate::shared::error::InventoryError;
    pub use crate::shared::Result;
}
