use runtime_inventory::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Mock ModuleSystem returning a fixed product descriptor, or failing
pub struct MockModuleSystem {
    descriptor: Option<ProductDescriptor>,
    pub requested_homes: Mutex<Vec<PathBuf>>,
}

impl MockModuleSystem {
    pub fn with_product(name: &str, version: &str) -> Self {
        Self {
            descriptor: Some(ProductDescriptor::new(
                Some(name.to_string()),
                Some(version.to_string()),
            )),
            requested_homes: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            descriptor: None,
            requested_homes: Mutex::new(Vec::new()),
        }
    }
}

impl ModuleSystem for MockModuleSystem {
    fn locate_version_descriptor(&self, home: &Path) -> std::result::Result<ProductDescriptor, InventoryError> {
        self.requested_homes.lock().unwrap().push(home.to_path_buf());
        self.descriptor.clone().ok_or_else(|| InventoryError::ProbeDegraded {
            marker: "module system".to_string(),
            details: format!("no product descriptor under {}", home.display()),
        })
    }
}
