/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with the file system, the delivery
/// queue, the host and the console.
pub mod outbound;
