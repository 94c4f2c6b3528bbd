/// Host identity adapters
mod system_host_identity;

pub use system_host_identity::SystemHostIdentity;
