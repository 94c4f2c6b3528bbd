use crate::inventory::domain::workload_fingerprint::{
    MISCONFIGURED_SERVER_LABEL, UNKNOWN_SERVER_LABEL,
};
use crate::inventory::domain::Marker;
use crate::inventory::services::poll::{poll_with, PollSettings};
use crate::ports::outbound::RuntimeProbe;
use crate::shared::error::InventoryError;
use std::path::Path;
use tracing::debug;

pub const JBOSS_MODULE_MARKER: &str = "org.jboss.modules.Module";
pub const QUARKUS_MARKER: &str = "io.quarkus.bootstrap.runner.QuarkusEntryPoint";
pub const SPRING_BOOT_MARKER: &str = "org.springframework.boot.SpringApplication";
pub const TOMCAT_ARCHIVE_MARKER: &str = "tomcat-catalina";

pub const MODULE_PATH_PROPERTY: &str = "module.path";
pub const SERVER_HOME_PROPERTY: &str = "jboss.home.dir";

/// Turns a present marker into a workload label
///
/// Implementations never fail: problems degrade to a label.
pub trait ExtractionStrategy: Send + Sync {
    fn extract(&self, marker: &Marker, probe: &dyn RuntimeProbe) -> String;
}

/// Always reports the same label
pub struct ConstantLabel(pub &'static str);

impl ExtractionStrategy for ConstantLabel {
    fn extract(&self, _marker: &Marker, _probe: &dyn RuntimeProbe) -> String {
        self.0.to_string()
    }
}

/// Reports `<prefix> <implementation version>`, or the bare prefix
pub struct VersionedLabel(pub &'static str);

impl ExtractionStrategy for VersionedLabel {
    fn extract(&self, marker: &Marker, probe: &dyn RuntimeProbe) -> String {
        match probe.implementation_version(marker) {
            Some(version) if !version.is_empty() => format!("{} {}", self.0, version),
            _ => self.0.to_string(),
        }
    }
}

/// Application server strategy
///
/// The module system publishes its module path asynchronously while booting,
/// so it is polled first. The product string is then read through the module
/// system from the server home directory.
pub struct ModuleSystemStrategy {
    poll: PollSettings,
}

impl ModuleSystemStrategy {
    pub fn new(poll: PollSettings) -> Self {
        Self { poll }
    }

    fn product_string(&self, marker: &Marker, probe: &dyn RuntimeProbe) -> Result<String, InventoryError> {
        let home = probe
            .property(SERVER_HOME_PROPERTY)
            .ok_or_else(|| InventoryError::degraded(marker.identifier(), "server home directory unknown"))?;
        let modules = probe
            .module_system()
            .ok_or_else(|| InventoryError::degraded(marker.identifier(), "module system unreachable"))?;
        let descriptor = modules.locate_version_descriptor(Path::new(&home))?;
        descriptor
            .pretty_version_string()
            .ok_or_else(|| InventoryError::degraded(marker.identifier(), "product descriptor is empty"))
    }
}

impl ExtractionStrategy for ModuleSystemStrategy {
    fn extract(&self, marker: &Marker, probe: &dyn RuntimeProbe) -> String {
        let module_path = poll_with(|| probe.property(MODULE_PATH_PROPERTY), self.poll);
        if module_path.is_none() {
            debug!(
                marker = %marker,
                ceiling_ms = self.poll.ceiling().as_millis() as u64,
                "module path never became available"
            );
            return UNKNOWN_SERVER_LABEL.to_string();
        }

        match self.product_string(marker, probe) {
            Ok(label) => label,
            Err(e) => {
                debug!(marker = %marker, error = %e, "product lookup failed");
                MISCONFIGURED_SERVER_LABEL.to_string()
            }
        }
    }
}

/// MarkerRegistry policy: ordered marker to strategy mapping
///
/// Order is significant. The first marker present wins and later entries are
/// never consulted, even if they are also present.
#[derive(Default)]
pub struct MarkerRegistry {
    entries: Vec<(Marker, Box<dyn ExtractionStrategy>)>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, marker: Marker, strategy: impl ExtractionStrategy + 'static) -> Self {
        self.entries.push((marker, Box::new(strategy)));
        self
    }

    /// Application server, Quarkus, Spring Boot, Tomcat, in that order.
    pub fn standard(poll: PollSettings) -> Self {
        Self::new()
            .register(
                Marker::type_name(JBOSS_MODULE_MARKER),
                ModuleSystemStrategy::new(poll),
            )
            .register(Marker::type_name(QUARKUS_MARKER), VersionedLabel("Quarkus"))
            .register(Marker::type_name(SPRING_BOOT_MARKER), VersionedLabel("Spring Boot"))
            .register(Marker::archive(TOMCAT_ARCHIVE_MARKER), ConstantLabel("Tomcat / JWS"))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Marker, &dyn ExtractionStrategy)> {
        self.entries.iter().map(|(marker, strategy)| (marker, strategy.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
