use crate::inventory::domain::ProductDescriptor;
use crate::inventory::services::manifest::parse_main_attributes;
use crate::ports::outbound::ModuleSystem;
use crate::shared::error::InventoryError;
use std::fs;
use std::path::{Path, PathBuf};

const MARKER: &str = "org.jboss.modules.Module";
const PRODUCT_CONF: &str = "bin/product.conf";
const PRODUCT_MODULE_DIR: &str = "modules/system/layers/base/org/jboss/as/product";
const VERSION_TXT: &str = "version.txt";
const RELEASE_NAME: &str = "JBoss-Product-Release-Name";
const RELEASE_VERSION: &str = "JBoss-Product-Release-Version";

/// JBossModuleSystem adapter reading product metadata from a server install
///
/// A product build names its slot in `bin/product.conf`; the slot's product
/// module carries the release name and version in its manifest. Community
/// builds have no slot and describe themselves in `version.txt`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JBossModuleSystem;

impl JBossModuleSystem {
    pub fn new() -> Self {
        Self
    }

    fn product_slot(home: &Path) -> Option<String> {
        let text = fs::read_to_string(home.join(PRODUCT_CONF)).ok()?;
        text.lines()
            .filter_map(|line| line.trim().split_once('='))
            .find(|(key, _)| key.trim() == "slot")
            .map(|(_, value)| value.trim().to_string())
            .filter(|slot| !slot.is_empty())
    }

    fn product_manifest_path(home: &Path, slot: &str) -> PathBuf {
        home.join(PRODUCT_MODULE_DIR)
            .join(slot)
            .join("dir/META-INF/MANIFEST.MF")
    }

    fn from_manifest(path: &Path) -> Result<ProductDescriptor, InventoryError> {
        let text = fs::read_to_string(path).map_err(|e| {
            InventoryError::degraded(MARKER, format!("{}: {}", path.display(), e))
        })?;
        let mut attributes = parse_main_attributes(&text);
        Ok(ProductDescriptor::new(
            attributes.remove(RELEASE_NAME),
            attributes.remove(RELEASE_VERSION),
        ))
    }

    /// `WildFly Full 30.0.1.Final (WildFly Core 22.0.2.Final)` or
    /// `JBoss Enterprise Application Platform - Version 7.4.0.GA`.
    fn from_version_txt(path: &Path) -> Result<ProductDescriptor, InventoryError> {
        let text = fs::read_to_string(path).map_err(|e| {
            InventoryError::degraded(MARKER, format!("{}: {}", path.display(), e))
        })?;
        let line = text.lines().next().unwrap_or_default().trim();
        if line.is_empty() {
            return Err(InventoryError::degraded(MARKER, "version.txt is empty"));
        }

        if let Some((name, version)) = line.split_once(" - Version ") {
            return Ok(ProductDescriptor::new(
                Some(name.trim().to_string()),
                Some(version.trim().to_string()),
            ));
        }
        let without_core = line.split(" (").next().unwrap_or(line);
        match without_core.rsplit_once(' ') {
            Some((name, version)) => Ok(ProductDescriptor::new(
                Some(name.to_string()),
                Some(version.to_string()),
            )),
            None => Ok(ProductDescriptor::new(None, Some(without_core.to_string()))),
        }
    }
}

impl ModuleSystem for JBossModuleSystem {
    fn locate_version_descriptor(&self, home: &Path) -> Result<ProductDescriptor, InventoryError> {
        if !home.is_dir() {
            return Err(InventoryError::degraded(
                MARKER,
                format!("server home {} is not a directory", home.display()),
            ));
        }
        match Self::product_slot(home) {
            Some(slot) => Self::from_manifest(&Self::product_manifest_path(home, &slot)),
            None => Self::from_version_txt(&home.join(VERSION_TXT)),
        }
    }
}
