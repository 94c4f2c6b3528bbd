/// Data Transfer Objects for application layer
///
/// DTOs carry data between the application layer and the adapters,
/// keeping the inventory domain isolated.
mod deployment_context;
mod sbom_request;
mod sbom_response;
mod workload_report;

pub use deployment_context::{DeploymentContext, NOT_PROVIDED};
pub use sbom_request::SbomRequest;
pub use sbom_response::SbomResponse;
pub use workload_report::{WorkloadReport, REPORT_VERSION};
