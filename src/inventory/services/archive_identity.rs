use super::archive_io::{consume_entry, open_archive, read_manifest, MAX_NESTED_ARCHIVE_SIZE};
use super::digest::{digest_stream, ContentDigests};
use super::manifest::recorded_subset;
use crate::inventory::domain::archive_record::{
    NAME_ATTRIBUTE, PATH_ATTRIBUTE, SHA256_ATTRIBUTE, SHA512_ATTRIBUTE,
};
use crate::inventory::domain::{ArchiveLocator, ArchiveRecord};
use crate::ports::outbound::ArchiveResolver;
use crate::shared::error::InventoryError;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Cursor};
use zip::ZipArchive;

/// ArchiveIdentityResolver computes content identity for archives on disk
///
/// Plain archives are hashed by streaming the file once; the manifest is then
/// read through the archive's central directory. Nested archives are hashed
/// while they are read out of their container.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArchiveIdentityResolver;

impl ArchiveIdentityResolver {
    pub fn new() -> Self {
        Self
    }

    fn resolve_file(&self, locator: &ArchiveLocator) -> Result<ArchiveRecord, InventoryError> {
        let label = locator.to_string();
        let file = File::open(locator.path()).map_err(|e| InventoryError::io(label.clone(), e))?;
        let digests =
            digest_stream(BufReader::new(file)).map_err(|e| InventoryError::io(label.clone(), e))?;

        let manifest = File::open(locator.path())
            .map_err(|e| InventoryError::io(label.clone(), e))
            .and_then(|file| {
                ZipArchive::new(BufReader::new(file)).map_err(|e| InventoryError::zip(label.clone(), e))
            })
            .and_then(|mut archive| {
                read_manifest(&mut archive).map_err(|e| InventoryError::io(label.clone(), e))
            });

        let manifest = match manifest {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::debug!(locator = %label, error = %e, "manifest unavailable");
                BTreeMap::new()
            }
        };

        Ok(build_record(locator, digests, &manifest))
    }

    fn resolve_nested(&self, locator: &ArchiveLocator) -> Result<ArchiveRecord, InventoryError> {
        let label = locator.to_string();
        let (last, containers) = match locator.entries().split_last() {
            Some(split) => split,
            None => return self.resolve_file(locator),
        };

        let mut container = open_archive(locator.path(), containers)?;
        let entry = container
            .by_name(last)
            .map_err(|e| InventoryError::zip(label.clone(), e))?;
        let consumed = consume_entry(entry, MAX_NESTED_ARCHIVE_SIZE)
            .map_err(|e| InventoryError::io(label.clone(), e))?;

        let manifest = match consumed.bytes {
            Some(bytes) => ZipArchive::new(Cursor::new(bytes))
                .ok()
                .and_then(|mut inner| read_manifest(&mut inner).ok())
                .unwrap_or_default(),
            None => BTreeMap::new(),
        };

        Ok(build_record(locator, consumed.digests, &manifest))
    }
}

impl ArchiveResolver for ArchiveIdentityResolver {
    fn resolve(&self, origin: &str) -> Result<ArchiveRecord, InventoryError> {
        let locator = ArchiveLocator::parse(origin).ok_or_else(|| InventoryError::NotAnArchive {
            locator: origin.to_string(),
        })?;

        if locator.is_nested() {
            self.resolve_nested(&locator)
        } else {
            self.resolve_file(&locator)
        }
    }
}

fn build_record(
    locator: &ArchiveLocator,
    digests: ContentDigests,
    manifest: &BTreeMap<String, String>,
) -> ArchiveRecord {
    let mut attributes = recorded_subset(manifest);
    attributes.insert(NAME_ATTRIBUTE.to_string(), locator.file_name());
    attributes.insert(PATH_ATTRIBUTE.to_string(), locator.to_string());
    attributes.insert(SHA256_ATTRIBUTE.to_string(), digests.sha256().to_string());
    attributes.insert(SHA512_ATTRIBUTE.to_string(), digests.sha512().to_string());

    ArchiveRecord::new(locator.to_string(), digests.sha512().to_string(), attributes)
}
