use super::{DependencyEdge, LibraryComponent};
use std::fmt;

/// CycloneDX document version carried in the top-level `version` field
pub const SCHEMA_VERSION: u32 = 1;

/// ToolIdentity value object naming the generator of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolIdentity {
    name: String,
    vendor: String,
    version: String,
}

impl ToolIdentity {
    pub fn new(name: String, vendor: String, version: String) -> Self {
        Self {
            name,
            vendor,
            version,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

/// HostIdentity value object: best-effort address and host name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostIdentity {
    address: Option<String>,
    hostname: Option<String>,
}

impl HostIdentity {
    pub fn new(address: Option<String>, hostname: Option<String>) -> Self {
        Self { address, hostname }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }
}

/// `10.0.0.4 (web-1)`, or `unknown` when nothing could be determined.
impl fmt::Display for HostIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.address.as_deref(), self.hostname.as_deref()) {
            (Some(address), Some(hostname)) => write!(f, "{} ({})", address, hostname),
            (Some(address), None) => f.write_str(address),
            (None, Some(hostname)) => f.write_str(hostname),
            (None, None) => f.write_str("unknown"),
        }
    }
}

/// SbomMetadata value object representing run metadata
#[derive(Debug, Clone)]
pub struct SbomMetadata {
    timestamp: String,
    tool: ToolIdentity,
    host: HostIdentity,
}

impl SbomMetadata {
    pub fn new(timestamp: String, tool: ToolIdentity, host: HostIdentity) -> Self {
        Self {
            timestamp,
            tool,
            host,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool(&self) -> &ToolIdentity {
        &self.tool
    }

    pub fn host(&self) -> &HostIdentity {
        &self.host
    }
}

/// SbomDocument aggregate: one report generation's bill of materials
#[derive(Debug, Clone)]
pub struct SbomDocument {
    schema_version: u32,
    serial_number: String,
    metadata: SbomMetadata,
    components: Vec<LibraryComponent>,
    dependencies: Vec<DependencyEdge>,
}

impl SbomDocument {
    pub fn new(
        serial_number: String,
        metadata: SbomMetadata,
        components: Vec<LibraryComponent>,
        dependencies: Vec<DependencyEdge>,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            serial_number,
            metadata,
            components,
            dependencies,
        }
    }

    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn metadata(&self) -> &SbomMetadata {
        &self.metadata
    }

    pub fn components(&self) -> &[LibraryComponent] {
        &self.components
    }

    pub fn dependencies(&self) -> &[DependencyEdge] {
        &self.dependencies
    }
}
