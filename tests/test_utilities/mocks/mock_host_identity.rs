use runtime_inventory::prelude::*;

/// Mock HostIdentityProvider with a fixed identity
pub struct MockHostIdentity {
    address: Option<String>,
    hostname: Option<String>,
}

impl MockHostIdentity {
    pub fn new(address: &str, hostname: &str) -> Self {
        Self {
            address: Some(address.to_string()),
            hostname: Some(hostname.to_string()),
        }
    }

    pub fn unknown() -> Self {
        Self {
            address: None,
            hostname: None,
        }
    }
}

impl HostIdentityProvider for MockHostIdentity {
    fn host_identity(&self) -> HostIdentity {
        HostIdentity::new(self.address.clone(), self.hostname.clone())
    }
}
