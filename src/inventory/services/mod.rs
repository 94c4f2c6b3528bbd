pub mod archive_identity;
pub mod archive_io;
pub mod archive_scanner;
pub mod descriptor_parser;
pub mod digest;
pub mod fingerprint_resolver;
pub mod library_inventory;
pub mod load_event_deduplicator;
pub mod manifest;
pub mod poll;
pub mod sbom_assembler;

pub use archive_identity::ArchiveIdentityResolver;
pub use archive_scanner::{ArchiveScanner, ScanResult};
pub use fingerprint_resolver::WorkloadFingerprintResolver;
pub use library_inventory::LibraryInventory;
pub use load_event_deduplicator::{LoadEventDeduplicator, LoadOutcome};
pub use poll::{poll_until, PollSettings};
pub use sbom_assembler::SbomAssembler;
