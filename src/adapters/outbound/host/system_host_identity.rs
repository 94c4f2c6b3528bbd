use crate::inventory::domain::HostIdentity;
use crate::ports::outbound::HostIdentityProvider;
use std::net::{IpAddr, ToSocketAddrs};

/// SystemHostIdentity adapter reading the local host name and address
///
/// The name comes from the operating system; the address from resolving that
/// name, preferring a non-loopback result. Resolution goes through the system
/// resolver and may block until it answers.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHostIdentity;

impl SystemHostIdentity {
    pub fn new() -> Self {
        Self
    }

    fn hostname() -> Option<String> {
        hostname::get()
            .ok()
            .map(|name| name.to_string_lossy().trim().to_string())
            .filter(|name| !name.is_empty())
    }

    fn address(hostname: &str) -> Option<IpAddr> {
        let addresses: Vec<IpAddr> = (hostname, 0)
            .to_socket_addrs()
            .ok()?
            .map(|addr| addr.ip())
            .collect();
        addresses
            .iter()
            .find(|ip| !ip.is_loopback())
            .or_else(|| addresses.first())
            .copied()
    }
}

impl HostIdentityProvider for SystemHostIdentity {
    fn host_identity(&self) -> HostIdentity {
        let hostname = Self::hostname();
        let address = hostname
            .as_deref()
            .and_then(Self::address)
            .map(|ip| ip.to_string());
        HostIdentity::new(address, hostname)
    }
}
