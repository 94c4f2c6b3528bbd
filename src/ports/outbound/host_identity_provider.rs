use crate::inventory::domain::HostIdentity;

/// HostIdentityProvider port for naming the machine a report comes from
pub trait HostIdentityProvider {
    /// Best-effort address and host name
    ///
    /// Never fails: unknown parts are left empty.
    fn host_identity(&self) -> HostIdentity;
}
