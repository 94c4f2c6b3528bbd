/// Use cases module containing application business logic orchestration
mod generate_sbom;
mod identify_workload;
mod track_load_events;

pub use generate_sbom::GenerateSbomUseCase;
pub use identify_workload::IdentifyWorkloadUseCase;
pub use track_load_events::TrackLoadEventsUseCase;
