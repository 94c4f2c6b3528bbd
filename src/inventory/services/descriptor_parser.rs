use crate::inventory::domain::{Coordinates, PackageDescriptor};
use crate::shared::error::InventoryError;
use serde::Deserialize;
use std::collections::BTreeMap;

pub const POM_FILE_NAME: &str = "pom.xml";
pub const POM_PROPERTIES_FILE_NAME: &str = "pom.properties";

/// Maximum number of `${...}` lookups made for a single value
const MAX_SUBSTITUTIONS: usize = 16;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PomProject {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    parent: Option<PomParent>,
    #[serde(default)]
    properties: BTreeMap<String, String>,
    #[serde(default)]
    dependencies: PomDependencies,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PomParent {
    group_id: Option<String>,
    version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PomDependencies {
    #[serde(default)]
    dependency: Vec<PomDependency>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PomDependency {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
}

/// True for `pom.xml` entries (any directory, including the archive root).
pub fn is_pom_entry(name: &str) -> bool {
    name == POM_FILE_NAME || name.ends_with("/pom.xml")
}

pub fn is_pom_properties_entry(name: &str) -> bool {
    name == POM_PROPERTIES_FILE_NAME || name.ends_with("/pom.properties")
}

/// Parses a Maven `pom.xml` into coordinates and declared dependencies.
///
/// Group and version are inherited from `<parent>` when the project omits
/// them; with neither, the group stays unset. `${project.*}` and
/// `<properties>` references are expanded; a reference that cannot be
/// resolved is left as written and later references are still expanded.
pub fn parse_pom(xml: &str, locator: &str) -> Result<PackageDescriptor, InventoryError> {
    let project: PomProject =
        quick_xml::de::from_str(xml).map_err(|e| InventoryError::Descriptor {
            locator: locator.to_string(),
            details: e.to_string(),
        })?;

    let parent = project.parent.unwrap_or_default();
    let group = project.group_id.or(parent.group_id);
    let version = project.version.or(parent.version);
    let artifact = project
        .artifact_id
        .ok_or_else(|| InventoryError::Descriptor {
            locator: locator.to_string(),
            details: "missing artifactId".to_string(),
        })?;

    let mut variables = project.properties;
    if let Some(group) = &group {
        variables.insert("project.groupId".to_string(), group.clone());
        variables.insert("pom.groupId".to_string(), group.clone());
    }
    if let Some(version) = &version {
        variables.insert("project.version".to_string(), version.clone());
        variables.insert("pom.version".to_string(), version.clone());
        variables.insert("version".to_string(), version.clone());
    }
    variables.insert("project.artifactId".to_string(), artifact.clone());

    let expand = |value: Option<String>| value.map(|v| substitute(&v, &variables));
    let group = expand(group);
    let version = expand(version);

    let dependencies = project
        .dependencies
        .dependency
        .into_iter()
        .filter_map(|dep| {
            let dep_group = expand(dep.group_id)?;
            let dep_artifact = expand(dep.artifact_id)?;
            Some(Coordinates::new(
                Some(dep_group),
                dep_artifact,
                expand(dep.version),
            ))
        })
        .collect();

    Ok(PackageDescriptor::new(
        Coordinates::new(group, artifact, version),
        dependencies,
    ))
}

/// Parses `pom.properties` (`groupId`, `artifactId`, `version`).
///
/// Returns `None` unless both group and artifact are present.
pub fn parse_pom_properties(text: &str) -> Option<Coordinates> {
    let mut values = BTreeMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            values.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    Some(Coordinates::new(
        Some(values.remove("groupId")?),
        values.remove("artifactId")?,
        values.remove("version"),
    ))
}

fn substitute(value: &str, variables: &BTreeMap<String, String>) -> String {
    let mut result = value.to_string();
    let mut from = 0;
    for _ in 0..MAX_SUBSTITUTIONS {
        let Some(offset) = result[from..].find("${") else {
            break;
        };
        let start = from + offset;
        let Some(len) = result[start..].find('}') else {
            break;
        };
        let key = &result[start + 2..start + len];
        match variables.get(key) {
            Some(replacement) => {
                result = format!("{}{}{}", &result[..start], replacement, &result[start + len + 1..]);
                from = start;
            }
            None => from = start + len + 1,
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_pom() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>com.x</groupId>
  <artifactId>lib-b</artifactId>
  <version>2.0</version>
  <dependencies>
    <dependency>
      <groupId>com.x</groupId>
      <artifactId>lib-a</artifactId>
      <version>1.0</version>
    </dependency>
  </dependencies>
</project>"#;
        let descriptor = parse_pom(xml, "lib-b.jar!/pom.xml").unwrap();

        assert_eq!(descriptor.bom_ref().as_deref(), Some("com.x:lib-b:2.0"));
        assert_eq!(descriptor.dependency_refs(), vec!["com.x:lib-a:1.0".to_string()]);
    }

    #[test]
    fn test_parent_inheritance_and_substitution() {
        let xml = r#"<project>
  <parent>
    <groupId>org.acme</groupId>
    <artifactId>acme-parent</artifactId>
    <version>3.1</version>
  </parent>
  <artifactId>acme-core</artifactId>
  <properties>
    <jackson.version>2.15.2</jackson.version>
  </properties>
  <dependencies>
    <dependency>
      <groupId>${project.groupId}</groupId>
      <artifactId>acme-api</artifactId>
      <version>${project.version}</version>
    </dependency>
    <dependency>
      <groupId>com.fasterxml.jackson.core</groupId>
      <artifactId>jackson-databind</artifactId>
      <version>${jackson.version}</version>
    </dependency>
    <dependency>
      <groupId>org.slf4j</groupId>
      <artifactId>slf4j-api</artifactId>
    </dependency>
  </dependencies>
</project>"#;
        let descriptor = parse_pom(xml, "acme-core.jar!/pom.xml").unwrap();

        assert_eq!(descriptor.bom_ref().as_deref(), Some("org.acme:acme-core:3.1"));
        assert_eq!(
            descriptor.dependency_refs(),
            vec![
                "org.acme:acme-api:3.1".to_string(),
                "com.fasterxml.jackson.core:jackson-databind:2.15.2".to_string(),
                "org.slf4j:slf4j-api".to_string(),
            ]
        );
    }

    #[test]
    fn test_unresolved_reference_is_kept() {
        let xml = r#"<project><groupId>g</groupId><artifactId>a</artifactId><version>${revision}</version></project>"#;
        let descriptor = parse_pom(xml, "a.jar!/pom.xml").unwrap();
        assert_eq!(descriptor.coordinates().version(), Some("${revision}"));
    }

    #[test]
    fn test_later_reference_expanded_after_unknown_one() {
        let xml = r#"<project>
  <groupId>g</groupId>
  <artifactId>a</artifactId>
  <version>1.0</version>
  <dependencies>
    <dependency>
      <groupId>g</groupId>
      <artifactId>b</artifactId>
      <version>${unknown}-${project.version}</version>
    </dependency>
  </dependencies>
</project>"#;
        let descriptor = parse_pom(xml, "a.jar!/pom.xml").unwrap();
        assert_eq!(
            descriptor.dependency_refs(),
            vec!["g:b:${unknown}-1.0".to_string()]
        );
    }

    #[test]
    fn test_substitute_mixed_values() {
        let variables: BTreeMap<String, String> = [
            ("project.version".to_string(), "2.1".to_string()),
            ("lib.version".to_string(), "${project.version}".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(substitute("${a}.${b}.${project.version}", &variables), "${a}.${b}.2.1");
        assert_eq!(substitute("${lib.version}", &variables), "2.1");
        assert_eq!(substitute("${unterminated", &variables), "${unterminated");
    }

    #[test]
    fn test_pom_without_group_leaves_group_unset() {
        let xml = r#"<project><artifactId>widget</artifactId><version>4.2</version></project>"#;
        let descriptor = parse_pom(xml, "widget.jar!/pom.xml").unwrap();

        assert!(descriptor.coordinates().group().is_none());
        assert_eq!(descriptor.coordinates().artifact(), "widget");
        assert!(descriptor.bom_ref().is_none());
    }

    #[test]
    fn test_malformed_pom_is_descriptor_error() {
        let result = parse_pom("<project><groupId>g</project>", "bad.jar!/pom.xml");
        assert!(matches!(result, Err(InventoryError::Descriptor { .. })));

        let missing_artifact = parse_pom("<project><groupId>g</groupId></project>", "x");
        assert!(missing_artifact.is_err());
    }

    #[test]
    fn test_parse_pom_properties() {
        let text = "#Generated by Maven\n#Tue Jan 01 00:00:00 UTC 2024\ngroupId=com.x\nartifactId=lib-a\nversion=1.0\n";
        let coordinates = parse_pom_properties(text).unwrap();
        assert_eq!(coordinates.bom_ref().as_deref(), Some("com.x:lib-a:1.0"));

        assert!(parse_pom_properties("artifactId=lib-a\n").is_none());
    }

    #[test]
    fn test_entry_name_predicates() {
        assert!(is_pom_entry("META-INF/maven/com.x/lib-a/pom.xml"));
        assert!(is_pom_entry("pom.xml"));
        assert!(!is_pom_entry("META-INF/maven/com.x/lib-a/notpom.xml2"));
        assert!(is_pom_properties_entry("META-INF/maven/com.x/lib-a/pom.properties"));
    }
}
