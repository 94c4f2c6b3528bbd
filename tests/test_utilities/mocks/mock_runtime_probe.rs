use super::MockModuleSystem;
use runtime_inventory::prelude::*;
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock RuntimeProbe with a configurable set of present markers
///
/// A property registered with `with_late_property` only appears after it has
/// been asked for the given number of times, like a value published while
/// the host is still booting.
#[derive(Default)]
pub struct MockRuntimeProbe {
    present: HashSet<String>,
    versions: BTreeMap<String, String>,
    properties: BTreeMap<String, String>,
    late_properties: BTreeMap<String, (String, usize)>,
    lookups: AtomicUsize,
    module_system: Option<MockModuleSystem>,
}

impl MockRuntimeProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marker(mut self, identifier: &str, version: Option<&str>) -> Self {
        self.present.insert(identifier.to_string());
        if let Some(version) = version {
            self.versions
                .insert(identifier.to_string(), version.to_string());
        }
        self
    }

    pub fn with_property(mut self, key: &str, value: &str) -> Self {
        self.properties.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_late_property(mut self, key: &str, value: &str, after_lookups: usize) -> Self {
        self.late_properties
            .insert(key.to_string(), (value.to_string(), after_lookups));
        self
    }

    pub fn with_module_system(mut self, module_system: MockModuleSystem) -> Self {
        self.module_system = Some(module_system);
        self
    }

    pub fn module_system_mock(&self) -> Option<&MockModuleSystem> {
        self.module_system.as_ref()
    }
}

impl RuntimeProbe for MockRuntimeProbe {
    fn is_present(&self, marker: &Marker) -> bool {
        self.present.contains(marker.identifier())
    }

    fn implementation_version(&self, marker: &Marker) -> Option<String> {
        self.versions.get(marker.identifier()).cloned()
    }

    fn property(&self, key: &str) -> Option<String> {
        if let Some(value) = self.properties.get(key) {
            return Some(value.clone());
        }
        let (value, after) = self.late_properties.get(key)?;
        let seen = self.lookups.fetch_add(1, Ordering::SeqCst);
        (seen >= *after).then(|| value.clone())
    }

    fn module_system(&self) -> Option<&dyn ModuleSystem> {
        self.module_system
            .as_ref()
            .map(|module_system| module_system as &dyn ModuleSystem)
    }
}
