use crate::inventory::domain::{
    ComponentType, DependencyEdge, LibraryComponent, SbomDocument, SbomMetadata,
};
use crate::ports::outbound::SbomFormatter;
use crate::shared::Result;
use serde::Serialize;

const SPEC_VERSION: &str = "1.4";
const HOST_COMPONENT_DESCRIPTION: &str = "Java";
const UNKNOWN_MANUFACTURER: &str = "Unknown";

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "bomFormat")]
    bom_format: &'static str,
    #[serde(rename = "specVersion")]
    spec_version: &'static str,
    version: u32,
    #[serde(rename = "serialNumber")]
    serial_number: String,
    metadata: Metadata,
    components: Vec<Component>,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Vec<Tool>,
    component: HostComponent,
    manufacture: Manufacture,
}

#[derive(Debug, Serialize)]
struct Tool {
    vendor: String,
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct HostComponent {
    #[serde(rename = "type")]
    component_type: &'static str,
    name: String,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct Manufacture {
    name: &'static str,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "bom-ref")]
    bom_ref: String,
    #[serde(rename = "type")]
    component_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<String>,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    hashes: Vec<Hash>,
    scope: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    purl: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    properties: Vec<Property>,
}

#[derive(Debug, Serialize)]
struct Hash {
    alg: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct Property {
    name: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct Dependency {
    #[serde(rename = "ref")]
    bom_ref: String,
    #[serde(rename = "dependsOn")]
    depends_on: Vec<String>,
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.4 JSON format
///
/// This adapter implements the SbomFormatter port for CycloneDX format.
#[derive(Default)]
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_metadata(&self, metadata: &SbomMetadata) -> Metadata {
        let tool = metadata.tool();
        Metadata {
            timestamp: metadata.timestamp().to_string(),
            tools: vec![Tool {
                vendor: tool.vendor().to_string(),
                name: tool.name().to_string(),
                version: tool.version().to_string(),
            }],
            component: HostComponent {
                component_type: ComponentType::Application.as_str(),
                name: metadata.host().to_string(),
                description: HOST_COMPONENT_DESCRIPTION,
            },
            manufacture: Manufacture {
                name: UNKNOWN_MANUFACTURER,
            },
        }
    }

    fn build_components(&self, components: &[LibraryComponent]) -> Vec<Component> {
        components
            .iter()
            .map(|component| Component {
                bom_ref: component.bom_ref().to_string(),
                component_type: component.component_type().as_str(),
                group: component.group().map(str::to_string),
                name: component.name().to_string(),
                version: component.version().map(str::to_string),
                hashes: component
                    .hashes()
                    .iter()
                    .map(|hash| Hash {
                        alg: hash.algorithm().as_str(),
                        content: hash.content().to_string(),
                    })
                    .collect(),
                scope: component.scope().as_str(),
                purl: component.purl(),
                properties: component
                    .properties()
                    .iter()
                    .map(|(name, value)| Property {
                        name: name.clone(),
                        value: value.clone(),
                    })
                    .collect(),
            })
            .collect()
    }

    fn build_dependencies(&self, edges: &[DependencyEdge]) -> Vec<Dependency> {
        edges
            .iter()
            .map(|edge| Dependency {
                bom_ref: edge.from().to_string(),
                depends_on: edge.to().iter().cloned().collect(),
            })
            .collect()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format(&self, document: &SbomDocument) -> Result<String> {
        let bom = Bom {
            bom_format: "CycloneDX",
            spec_version: SPEC_VERSION,
            version: document.schema_version(),
            serial_number: document.serial_number().to_string(),
            metadata: self.build_metadata(document.metadata()),
            components: self.build_components(document.components()),
            dependencies: self.build_dependencies(document.dependencies()),
        };

        Ok(serde_json::to_string_pretty(&bom)?)
    }
}
