use crate::inventory::domain::{ArchiveLocator, Marker};
use crate::inventory::services::archive_io::{open_archive, read_manifest};
use crate::inventory::services::manifest::IMPLEMENTATION_VERSION;
use crate::ports::outbound::{ModuleSystem, RuntimeProbe};
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::debug;

/// What one classpath archive contributes to marker lookup
#[derive(Debug)]
struct IndexedArchive {
    file_name: String,
    entries: HashSet<String>,
    implementation_version: Option<String>,
}

/// ClasspathProbe adapter inspecting the archives a process has loaded
///
/// A type marker is present when some archive on the classpath holds its
/// compiled class; an archive marker is present when some archive's file
/// name contains it. Archives are indexed once, on first lookup.
pub struct ClasspathProbe {
    classpath: Vec<PathBuf>,
    properties: BTreeMap<String, String>,
    module_system: Option<Box<dyn ModuleSystem>>,
    index: OnceLock<Vec<IndexedArchive>>,
}

impl ClasspathProbe {
    pub fn new(classpath: Vec<PathBuf>, properties: BTreeMap<String, String>) -> Self {
        Self {
            classpath,
            properties,
            module_system: None,
            index: OnceLock::new(),
        }
    }

    pub fn with_module_system(mut self, module_system: impl ModuleSystem + 'static) -> Self {
        self.module_system = Some(Box::new(module_system));
        self
    }

    fn index(&self) -> &[IndexedArchive] {
        self.index.get_or_init(|| {
            self.classpath
                .iter()
                .filter_map(|path| {
                    let locator = ArchiveLocator::parse(&path.to_string_lossy())?;
                    let mut archive = match open_archive(locator.path(), locator.entries()) {
                        Ok(archive) => archive,
                        Err(e) => {
                            debug!(path = %path.display(), error = %e, "classpath entry skipped");
                            return None;
                        }
                    };
                    let implementation_version = read_manifest(&mut archive)
                        .ok()
                        .and_then(|mut manifest| manifest.remove(IMPLEMENTATION_VERSION));
                    Some(IndexedArchive {
                        file_name: locator.file_name(),
                        entries: archive.file_names().map(str::to_string).collect(),
                        implementation_version,
                    })
                })
                .collect()
        })
    }

    fn providing_archive(&self, marker: &Marker) -> Option<&IndexedArchive> {
        let class_entry = marker.class_entry();
        self.index().iter().find(|archive| match (marker, &class_entry) {
            (Marker::Type(_), Some(entry)) => archive.entries.contains(entry),
            (Marker::Archive(fragment), _) => archive.file_name.contains(fragment.as_str()),
            _ => false,
        })
    }
}

impl RuntimeProbe for ClasspathProbe {
    fn is_present(&self, marker: &Marker) -> bool {
        self.providing_archive(marker).is_some()
    }

    fn implementation_version(&self, marker: &Marker) -> Option<String> {
        self.providing_archive(marker)?.implementation_version.clone()
    }

    fn property(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }

    fn module_system(&self) -> Option<&dyn ModuleSystem> {
        self.module_system.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::filesystem::JBossModuleSystem;
    use crate::inventory::test_support::write_jar;
    use tempfile::TempDir;

    #[test]
    fn test_type_marker_and_version() {
        let temp_dir = TempDir::new().unwrap();
        let quarkus = write_jar(
            temp_dir.path(),
            "quarkus-bootstrap-runner.jar",
            &[
                ("META-INF/MANIFEST.MF", b"Implementation-Version: 3.4.1\r\n\r\n"),
                ("io/quarkus/bootstrap/runner/QuarkusEntryPoint.class", b"\xca\xfe"),
            ],
        );
        let probe = ClasspathProbe::new(vec![quarkus], BTreeMap::new());
        let marker = Marker::type_name("io.quarkus.bootstrap.runner.QuarkusEntryPoint");

        assert!(probe.is_present(&marker));
        assert_eq!(probe.implementation_version(&marker).as_deref(), Some("3.4.1"));
        assert!(!probe.is_present(&Marker::type_name("org.jboss.modules.Module")));
    }

    #[test]
    fn test_archive_marker() {
        let temp_dir = TempDir::new().unwrap();
        let catalina = write_jar(temp_dir.path(), "tomcat-catalina-9.0.83.jar", &[("a", b"a")]);
        let probe = ClasspathProbe::new(vec![catalina], BTreeMap::new());

        assert!(probe.is_present(&Marker::archive("tomcat-catalina")));
        assert!(probe.implementation_version(&Marker::archive("tomcat-catalina")).is_none());
    }

    #[test]
    fn test_unreadable_entries_are_skipped() {
        let probe = ClasspathProbe::new(
            vec![PathBuf::from("/nonexistent/lib.jar"), PathBuf::from("/opt/classes")],
            BTreeMap::new(),
        );
        assert!(!probe.is_present(&Marker::archive("lib")));
    }

    #[test]
    fn test_properties_and_module_system() {
        let mut properties = BTreeMap::new();
        properties.insert("jboss.home.dir".to_string(), "/opt/eap".to_string());
        let probe = ClasspathProbe::new(Vec::new(), properties);

        assert_eq!(probe.property("jboss.home.dir").as_deref(), Some("/opt/eap"));
        assert!(probe.property("module.path").is_none());
        assert!(probe.module_system().is_none());

        let probe = probe.with_module_system(JBossModuleSystem::new());
        assert!(probe.module_system().is_some());
    }
}
