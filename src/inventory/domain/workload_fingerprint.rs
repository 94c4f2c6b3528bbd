use std::fmt;

/// Label reported when no known marker is present
pub const UNIDENTIFIED_LABEL: &str = "Unidentified";
/// Label reported when the server module system never finished booting
pub const UNKNOWN_SERVER_LABEL: &str = "Unknown EAP / Wildfly";
/// Label reported when the server is present but its product metadata is unreadable
pub const MISCONFIGURED_SERVER_LABEL: &str = "Unknown EAP / Wildfly - possibly misconfigured";

/// Marker whose presence in the process signals a hosting framework
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Marker {
    /// A fully qualified type name (`io.quarkus.bootstrap.runner.QuarkusEntryPoint`)
    Type(String),
    /// A fragment of a loaded archive's file name (`tomcat-catalina`)
    Archive(String),
}

impl Marker {
    pub fn type_name(name: &str) -> Self {
        Marker::Type(name.to_string())
    }

    pub fn archive(fragment: &str) -> Self {
        Marker::Archive(fragment.to_string())
    }

    pub fn identifier(&self) -> &str {
        match self {
            Marker::Type(name) | Marker::Archive(name) => name,
        }
    }

    /// Archive entry holding the marker type's compiled form.
    pub fn class_entry(&self) -> Option<String> {
        match self {
            Marker::Type(name) => Some(format!("{}.class", name.replace('.', "/"))),
            Marker::Archive(_) => None,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// WorkloadFingerprint value object: a best-guess workload label and the
/// marker that produced it (`None` when unidentified).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadFingerprint {
    label: String,
    marker: Option<Marker>,
}

impl WorkloadFingerprint {
    pub fn new(label: String, marker: Marker) -> Self {
        Self {
            label,
            marker: Some(marker),
        }
    }

    pub fn unidentified() -> Self {
        Self {
            label: UNIDENTIFIED_LABEL.to_string(),
            marker: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    pub fn is_identified(&self) -> bool {
        self.marker.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_class_entry() {
        let marker = Marker::type_name("org.jboss.modules.Module");
        assert_eq!(
            marker.class_entry().as_deref(),
            Some("org/jboss/modules/Module.class")
        );
        assert!(Marker::archive("tomcat-catalina").class_entry().is_none());
        assert_eq!(Marker::archive("tomcat-catalina").to_string(), "tomcat-catalina");
    }

    #[test]
    fn test_unidentified() {
        let fingerprint = WorkloadFingerprint::unidentified();
        assert_eq!(fingerprint.label(), "Unidentified");
        assert!(fingerprint.marker().is_none());
        assert!(!fingerprint.is_identified());
    }

    #[test]
    fn test_identified() {
        let fingerprint = WorkloadFingerprint::new(
            "Quarkus 3.4.1".to_string(),
            Marker::type_name("io.quarkus.bootstrap.runner.QuarkusEntryPoint"),
        );
        assert!(fingerprint.is_identified());
        assert_eq!(fingerprint.label(), "Quarkus 3.4.1");
    }
}
