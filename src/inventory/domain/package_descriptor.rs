use super::library_component::bom_ref;

/// Maven-style coordinates: an artifact with optional group and version
///
/// The group is absent when a descriptor neither declares one nor inherits
/// one from its parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinates {
    group: Option<String>,
    artifact: String,
    version: Option<String>,
}

impl Coordinates {
    pub fn new(group: Option<String>, artifact: String, version: Option<String>) -> Self {
        Self {
            group,
            artifact,
            version,
        }
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// `group:artifact[:version]`, or `None` without a group.
    pub fn bom_ref(&self) -> Option<String> {
        let group = self.group.as_deref()?;
        Some(bom_ref(group, &self.artifact, self.version.as_deref()))
    }
}

/// PackageDescriptor value object parsed from an embedded package descriptor
///
/// `dependencies` holds the declared sub-dependencies in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    coordinates: Coordinates,
    dependencies: Vec<Coordinates>,
}

impl PackageDescriptor {
    pub fn new(coordinates: Coordinates, dependencies: Vec<Coordinates>) -> Self {
        Self {
            coordinates,
            dependencies,
        }
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    pub fn dependencies(&self) -> &[Coordinates] {
        &self.dependencies
    }

    pub fn bom_ref(&self) -> Option<String> {
        self.coordinates.bom_ref()
    }

    /// References of the declared dependencies that carry a group.
    pub fn dependency_refs(&self) -> Vec<String> {
        self.dependencies.iter().filter_map(Coordinates::bom_ref).collect()
    }
}
