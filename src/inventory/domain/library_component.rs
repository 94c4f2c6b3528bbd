use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Property key recording where a component was found (`outer.jar!/entry.jar`)
pub const CODESOURCE_PROPERTY: &str = "codesource";

/// Digest algorithms carried on components
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// CycloneDX algorithm name
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ComponentHash value object: an algorithm and a lowercase hex digest
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentHash {
    algorithm: HashAlgorithm,
    content: String,
}

impl ComponentHash {
    pub fn new(algorithm: HashAlgorithm, content: String) -> Self {
        Self { algorithm, content }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComponentScope {
    #[default]
    Required,
}

impl ComponentScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentScope::Required => "required",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComponentType {
    #[default]
    Library,
    Application,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Library => "library",
            ComponentType::Application => "application",
        }
    }
}

/// Canonical component reference: `group:name:version`, or `group:name`
/// when the version is unknown.
pub fn bom_ref(group: &str, name: &str, version: Option<&str>) -> String {
    match version {
        Some(version) => format!("{}:{}:{}", group, name, version),
        None => format!("{}:{}", group, name),
    }
}

/// LibraryComponent entity describing one archive occurrence in a scan
///
/// Equality is structural: two occurrences with the same identity, hashes and
/// codesource are the same component. The same library vendored at two
/// different paths differs by codesource and is kept twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryComponent {
    bom_ref: String,
    group: Option<String>,
    name: String,
    version: Option<String>,
    hashes: BTreeSet<ComponentHash>,
    scope: ComponentScope,
    component_type: ComponentType,
    properties: BTreeMap<String, String>,
}

impl LibraryComponent {
    /// Creates a component. The bomRef is derived from group/name/version, or
    /// from the codesource when the group is unknown.
    pub fn new(
        group: Option<String>,
        name: String,
        version: Option<String>,
        codesource: String,
    ) -> Self {
        let bom_ref = match group.as_deref() {
            Some(group) if !name.is_empty() => bom_ref(group, &name, version.as_deref()),
            _ => codesource.clone(),
        };
        let mut properties = BTreeMap::new();
        properties.insert(CODESOURCE_PROPERTY.to_string(), codesource);

        Self {
            bom_ref,
            group,
            name,
            version,
            hashes: BTreeSet::new(),
            scope: ComponentScope::Required,
            component_type: ComponentType::Library,
            properties,
        }
    }

    pub fn with_hashes(mut self, hashes: impl IntoIterator<Item = ComponentHash>) -> Self {
        self.hashes.extend(hashes);
        self
    }

    /// Adds hashes only if the component has none yet.
    pub fn inherit_hashes(&mut self, fallback: &BTreeSet<ComponentHash>) {
        if self.hashes.is_empty() {
            self.hashes.extend(fallback.iter().cloned());
        }
    }

    pub fn bom_ref(&self) -> &str {
        &self.bom_ref
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn hashes(&self) -> &BTreeSet<ComponentHash> {
        &self.hashes
    }

    pub fn scope(&self) -> ComponentScope {
        self.scope
    }

    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn codesource(&self) -> Option<&str> {
        self.properties.get(CODESOURCE_PROPERTY).map(String::as_str)
    }

    /// Package URL for Maven coordinates, when group and version are known.
    pub fn purl(&self) -> Option<String> {
        let group = self.group.as_deref()?;
        let version = self.version.as_deref()?;
        Some(format!(
            "pkg:maven/{}/{}@{}",
            urlencoding::encode(group),
            urlencoding::encode(&self.name),
            urlencoding::encode(version)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_ref_format() {
        assert_eq!(bom_ref("com.x", "lib-a", Some("1.0")), "com.x:lib-a:1.0");
        assert_eq!(bom_ref("com.x", "lib-a", None), "com.x:lib-a");
    }

    #[test]
    fn test_new_component_with_coordinates() {
        let component = LibraryComponent::new(
            Some("com.x".to_string()),
            "lib-a".to_string(),
            Some("1.0".to_string()),
            "/srv/app.jar!/lib/lib-a-1.0.jar".to_string(),
        );

        assert_eq!(component.bom_ref(), "com.x:lib-a:1.0");
        assert_eq!(component.codesource(), Some("/srv/app.jar!/lib/lib-a-1.0.jar"));
        assert_eq!(component.scope(), ComponentScope::Required);
        assert_eq!(component.component_type(), ComponentType::Library);
        assert_eq!(
            component.purl().as_deref(),
            Some("pkg:maven/com.x/lib-a@1.0")
        );
    }

    #[test]
    fn test_missing_group_falls_back_to_codesource() {
        let component = LibraryComponent::new(
            None,
            "mystery".to_string(),
            None,
            "/srv/app.jar!/lib/mystery.jar".to_string(),
        );

        assert_eq!(component.bom_ref(), "/srv/app.jar!/lib/mystery.jar");
        assert!(component.purl().is_none());
    }

    #[test]
    fn test_inherit_hashes_only_when_empty() {
        let root: BTreeSet<ComponentHash> =
            [ComponentHash::new(HashAlgorithm::Sha512, "root".to_string())]
                .into_iter()
                .collect();

        let mut bare = LibraryComponent::new(
            Some("g".to_string()),
            "a".to_string(),
            None,
            "x".to_string(),
        );
        bare.inherit_hashes(&root);
        assert_eq!(bare.hashes().len(), 1);

        let mut hashed = LibraryComponent::new(
            Some("g".to_string()),
            "b".to_string(),
            None,
            "y".to_string(),
        )
        .with_hashes([ComponentHash::new(HashAlgorithm::Sha256, "own".to_string())]);
        hashed.inherit_hashes(&root);
        assert_eq!(hashed.hashes().len(), 1);
        assert_eq!(
            hashed.hashes().iter().next().map(|h| h.content()),
            Some("own")
        );
    }

    #[test]
    fn test_structural_equality_includes_codesource() {
        let make = |codesource: &str| {
            LibraryComponent::new(
                Some("com.x".to_string()),
                "lib-a".to_string(),
                Some("1.0".to_string()),
                codesource.to_string(),
            )
        };
        assert_eq!(make("a.jar!/x.jar"), make("a.jar!/x.jar"));
        assert_ne!(make("a.jar!/x.jar"), make("a.jar!/nested/x.jar"));
    }

    #[test]
    fn test_hash_algorithm_names() {
        assert_eq!(HashAlgorithm::Sha256.as_str(), "SHA-256");
        assert_eq!(HashAlgorithm::Sha512.to_string(), "SHA-512");
        assert_eq!(ComponentScope::Required.as_str(), "required");
        assert_eq!(ComponentType::Application.as_str(), "application");
    }
}
