use super::DeploymentContext;
use crate::inventory::domain::WorkloadFingerprint;
use serde::Serialize;

pub const REPORT_VERSION: &str = "1.0.0";

/// WorkloadReport - the fingerprint report field as serialized for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkloadReport {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "workloadType")]
    pub workload_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    pub is_ocp: bool,
    pub pod_name: String,
    pub pod_namespace: String,
}

impl WorkloadReport {
    pub fn new(fingerprint: &WorkloadFingerprint, context: &DeploymentContext) -> Self {
        Self {
            version: REPORT_VERSION.to_string(),
            name: context.identification_name.clone(),
            workload_type: fingerprint.label().to_string(),
            marker: fingerprint.marker().map(|marker| marker.to_string()),
            is_ocp: context.is_ocp,
            pod_name: context.pod_name.clone(),
            pod_namespace: context.pod_namespace.clone(),
        }
    }
}
