pub mod archive_locator;
pub mod archive_record;
pub mod dependency_graph;
pub mod library_component;
pub mod package_descriptor;
pub mod product_descriptor;
pub mod sbom_document;
pub mod seen_set;
pub mod workload_fingerprint;

pub use archive_locator::{is_archive_name, ArchiveLocator};
pub use archive_record::ArchiveRecord;
pub use dependency_graph::{DependencyEdge, DependencyGraph};
pub use library_component::{
    bom_ref, ComponentHash, ComponentScope, ComponentType, HashAlgorithm, LibraryComponent,
};
pub use package_descriptor::{Coordinates, PackageDescriptor};
pub use product_descriptor::ProductDescriptor;
pub use sbom_document::{HostIdentity, SbomDocument, SbomMetadata, ToolIdentity};
pub use seen_set::SeenSet;
pub use workload_fingerprint::{Marker, WorkloadFingerprint};
