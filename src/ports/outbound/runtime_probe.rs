use crate::inventory::domain::{Marker, ProductDescriptor};
use crate::shared::error::InventoryError;
use std::path::Path;

/// RuntimeProbe port for inspecting the monitored process
///
/// All version-sensitive introspection of the host runtime sits behind this
/// seam. Tests substitute fake providers.
pub trait RuntimeProbe: Send + Sync {
    /// Returns true if the marker is present in the running process
    fn is_present(&self, marker: &Marker) -> bool;

    /// Implementation version of the archive providing the marker, if recorded
    fn implementation_version(&self, marker: &Marker) -> Option<String>;

    /// Current value of a runtime property (`jboss.home.dir`, `module.path`, ...)
    ///
    /// Properties may appear late while the host is still booting.
    fn property(&self, key: &str) -> Option<String>;

    /// Access to the application server module system, if one can be reached
    fn module_system(&self) -> Option<&dyn ModuleSystem>;
}

/// ModuleSystem port for an application server's module layer
pub trait ModuleSystem: Send + Sync {
    /// Locates and reads the server's product version descriptor
    ///
    /// # Arguments
    /// * `home` - The server installation directory
    ///
    /// # Errors
    /// Returns `InventoryError::ProbeDegraded` if the descriptor cannot be
    /// located or read
    fn locate_version_descriptor(&self, home: &Path) -> Result<ProductDescriptor, InventoryError>;
}
