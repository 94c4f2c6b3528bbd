use crate::inventory::domain::WorkloadFingerprint;
use crate::inventory::policies::MarkerRegistry;
use crate::ports::outbound::RuntimeProbe;
use tracing::{debug, trace};

/// WorkloadFingerprintResolver classifies the hosting workload
///
/// Walks the registry in order and stops at the first marker the probe
/// reports present. Multiple present markers are not reported: only the
/// first registered one is.
pub struct WorkloadFingerprintResolver {
    registry: MarkerRegistry,
}

impl WorkloadFingerprintResolver {
    pub fn new(registry: MarkerRegistry) -> Self {
        Self { registry }
    }

    /// Returns the best-guess fingerprint. Never fails.
    pub fn fingerprint(&self, probe: &dyn RuntimeProbe) -> WorkloadFingerprint {
        for (marker, strategy) in self.registry.iter() {
            if !probe.is_present(marker) {
                trace!(marker = %marker, "marker absent");
                continue;
            }
            let label = strategy.extract(marker, probe);
            debug!(marker = %marker, label = %label, "workload identified");
            return WorkloadFingerprint::new(label, marker.clone());
        }
        debug!("no workload marker present");
        WorkloadFingerprint::unidentified()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::domain::Marker;
    use crate::inventory::policies::marker_registry::{
        QUARKUS_MARKER, SPRING_BOOT_MARKER, TOMCAT_ARCHIVE_MARKER,
    };
    use crate::inventory::policies::ConstantLabel;
    use crate::inventory::services::poll::PollSettings;
    use crate::ports::outbound::ModuleSystem;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct SetProbe {
        present: HashSet<Marker>,
        checked: Mutex<Vec<String>>,
    }

    impl SetProbe {
        fn with(markers: &[Marker]) -> Self {
            Self {
                present: markers.iter().cloned().collect(),
                checked: Mutex::new(Vec::new()),
            }
        }
    }

    impl RuntimeProbe for SetProbe {
        fn is_present(&self, marker: &Marker) -> bool {
            self.checked.lock().unwrap().push(marker.to_string());
            self.present.contains(marker)
        }
        fn implementation_version(&self, _marker: &Marker) -> Option<String> {
            Some("3.4.1".to_string())
        }
        fn property(&self, _key: &str) -> Option<String> {
            None
        }
        fn module_system(&self) -> Option<&dyn ModuleSystem> {
            None
        }
    }

    #[test]
    fn test_first_present_marker_wins() {
        let resolver = WorkloadFingerprintResolver::new(MarkerRegistry::standard(PollSettings::default()));
        let probe = SetProbe::with(&[
            Marker::type_name(SPRING_BOOT_MARKER),
            Marker::type_name(QUARKUS_MARKER),
        ]);

        let fingerprint = resolver.fingerprint(&probe);

        assert_eq!(fingerprint.label(), "Quarkus 3.4.1");
        assert_eq!(fingerprint.marker(), Some(&Marker::type_name(QUARKUS_MARKER)));
        let checked = probe.checked.lock().unwrap();
        assert!(!checked.contains(&SPRING_BOOT_MARKER.to_string()));
    }

    #[test]
    fn test_archive_marker() {
        let resolver = WorkloadFingerprintResolver::new(MarkerRegistry::standard(PollSettings::default()));
        let probe = SetProbe::with(&[Marker::archive(TOMCAT_ARCHIVE_MARKER)]);

        assert_eq!(resolver.fingerprint(&probe).label(), "Tomcat / JWS");
    }

    #[test]
    fn test_no_marker_is_unidentified() {
        let resolver = WorkloadFingerprintResolver::new(MarkerRegistry::standard(PollSettings::default()));
        let fingerprint = resolver.fingerprint(&SetProbe::with(&[]));

        assert_eq!(fingerprint.label(), "Unidentified");
        assert!(fingerprint.marker().is_none());
    }

    #[test]
    fn test_custom_registry() {
        let registry = MarkerRegistry::new()
            .register(Marker::type_name("com.acme.Boot"), ConstantLabel("Acme"));
        let resolver = WorkloadFingerprintResolver::new(registry);

        let fingerprint = resolver.fingerprint(&SetProbe::with(&[Marker::type_name("com.acme.Boot")]));
        assert_eq!(fingerprint.label(), "Acme");
    }
}
