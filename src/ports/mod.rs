/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains both inbound ports (driving ports - called by the
/// host and the CLI) and outbound ports (driven ports - infrastructure
/// interfaces).
pub mod inbound;
pub mod outbound;
