use crate::inventory::domain::{
    DependencyEdge, HostIdentity, LibraryComponent, SbomDocument, SbomMetadata, ToolIdentity,
};
use chrono::Utc;
use uuid::Uuid;

pub const TOOL_NAME: &str = "runtime-inventory";
pub const TOOL_VENDOR: &str = "Runtime Inventory Project";

/// SbomAssembler service wrapping scan output into a document
///
/// Pure assembly: serialization belongs to the formatters.
pub struct SbomAssembler;

impl SbomAssembler {
    /// Assembles a document with a fresh serial number and current timestamp
    ///
    /// # Arguments
    /// * `components` - Components found by the scanner
    /// * `dependencies` - Dependency edges found by the scanner
    /// * `host` - Best-effort identity of the host
    pub fn assemble(
        components: Vec<LibraryComponent>,
        dependencies: Vec<DependencyEdge>,
        host: HostIdentity,
    ) -> SbomDocument {
        let metadata = SbomMetadata::new(Utc::now().to_rfc3339(), Self::tool_identity(), host);
        let serial_number = format!("urn:uuid:{}", Uuid::new_v4());

        SbomDocument::new(serial_number, metadata, components, dependencies)
    }

    /// This tool, with the compile-time crate version
    pub fn tool_identity() -> ToolIdentity {
        ToolIdentity::new(
            TOOL_NAME.to_string(),
            TOOL_VENDOR.to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble() {
        let component = LibraryComponent::new(
            Some("com.x".to_string()),
            "lib-a".to_string(),
            Some("1.0".to_string()),
            "app.jar!/lib-a-1.0.jar".to_string(),
        );
        let document = SbomAssembler::assemble(vec![component], Vec::new(), HostIdentity::unknown());

        assert_eq!(document.schema_version(), 1);
        assert!(document.serial_number().starts_with("urn:uuid:"));
        assert!(!document.metadata().timestamp().is_empty());
        assert_eq!(document.metadata().tool().name(), "runtime-inventory");
        assert_eq!(document.metadata().tool().version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(document.metadata().host().to_string(), "unknown");
        assert_eq!(document.components().len(), 1);
    }

    #[test]
    fn test_serial_numbers_are_unique() {
        let first = SbomAssembler::assemble(Vec::new(), Vec::new(), HostIdentity::unknown());
        let second = SbomAssembler::assemble(Vec::new(), Vec::new(), HostIdentity::unknown());
        assert_ne!(first.serial_number(), second.serial_number());
    }
}
