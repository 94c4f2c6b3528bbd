/// Inbound ports (Driving ports)
///
/// Interfaces through which the host process and the CLI drive the engine.
pub mod load_event_hook;

pub use load_event_hook::LoadEventHook;
