use crate::application::dto::{DeploymentContext, WorkloadReport};
use crate::inventory::policies::MarkerRegistry;
use crate::inventory::services::WorkloadFingerprintResolver;
use crate::ports::outbound::RuntimeProbe;
use tracing::info;

/// IdentifyWorkloadUseCase - fingerprints the running workload
///
/// Never fails: a workload nothing recognizes is reported as unidentified.
pub struct IdentifyWorkloadUseCase {
    resolver: WorkloadFingerprintResolver,
}

impl IdentifyWorkloadUseCase {
    pub fn new(registry: MarkerRegistry) -> Self {
        Self {
            resolver: WorkloadFingerprintResolver::new(registry),
        }
    }

    /// Fingerprints the workload behind `probe` and wraps the result for delivery
    ///
    /// # Arguments
    /// * `probe` - View of the running process
    /// * `context` - Deployment identity copied into the report
    pub fn execute(&self, probe: &dyn RuntimeProbe, context: &DeploymentContext) -> WorkloadReport {
        let fingerprint = self.resolver.fingerprint(probe);
        if fingerprint.is_identified() {
            info!(workload = %fingerprint.label(), "workload fingerprinted");
        } else {
            info!("no workload marker present");
        }
        WorkloadReport::new(&fingerprint, context)
    }
}
