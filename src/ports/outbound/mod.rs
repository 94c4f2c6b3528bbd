/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the engine uses to interact with
/// the file system, the host runtime, the delivery queue and the console.
pub mod archive_resolver;
pub mod formatter;
pub mod host_identity_provider;
pub mod output_presenter;
pub mod progress_reporter;
pub mod record_sink;
pub mod runtime_probe;

pub use archive_resolver::ArchiveResolver;
pub use formatter::SbomFormatter;
pub use host_identity_provider::HostIdentityProvider;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use record_sink::RecordSink;
pub use runtime_probe::{ModuleSystem, RuntimeProbe};
