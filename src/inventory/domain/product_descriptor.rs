/// ProductDescriptor value object for an application server installation
///
/// Read from the server's product metadata on disk. Either field may be
/// missing on community builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDescriptor {
    name: Option<String>,
    version: Option<String>,
}

impl ProductDescriptor {
    pub fn new(name: Option<String>, version: Option<String>) -> Self {
        Self { name, version }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Human readable product string (`JBoss EAP 7.4.0.GA`).
    ///
    /// Returns `None` when neither name nor version is known.
    pub fn pretty_version_string(&self) -> Option<String> {
        match (self.name.as_deref(), self.version.as_deref()) {
            (Some(name), Some(version)) => Some(format!("{} {}", name, version)),
            (Some(name), None) => Some(name.to_string()),
            (None, Some(version)) => Some(format!("WildFly {}", version)),
            (None, None) => None,
        }
    }
}
