/// Mock implementations for testing
mod mock_host_identity;
mod mock_module_system;
mod mock_progress_reporter;
mod mock_record_sink;
mod mock_runtime_probe;

pub use mock_host_identity::MockHostIdentity;
pub use mock_module_system::MockModuleSystem;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_record_sink::MockRecordSink;
pub use mock_runtime_probe::MockRuntimeProbe;
