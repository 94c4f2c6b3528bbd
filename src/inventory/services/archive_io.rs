use super::digest::{ContentDigests, DigestReader};
use super::manifest::{read_main_attributes, MANIFEST_ENTRY};
use crate::inventory::domain::archive_locator::NESTED_SEPARATOR;
use crate::shared::error::InventoryError;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Largest nested archive held in memory for inspection (256 MiB)
///
/// Bigger entries are still hashed, but their contents are not opened.
pub const MAX_NESTED_ARCHIVE_SIZE: u64 = 256 * 1024 * 1024;

pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek> ReadSeek for T {}

pub type DynArchive = ZipArchive<Box<dyn ReadSeek>>;

/// A nested entry consumed in one pass: its digests and, if small enough,
/// its bytes.
pub struct ConsumedEntry {
    pub digests: ContentDigests,
    pub bytes: Option<Vec<u8>>,
}

/// Opens `path` and descends through `entries`, buffering each nested level.
///
/// With no entries this is the archive file itself.
pub fn open_archive(path: &Path, entries: &[String]) -> Result<DynArchive, InventoryError> {
    let mut label = path.display().to_string();
    let file = File::open(path).map_err(|e| InventoryError::io(label.clone(), e))?;
    let reader: Box<dyn ReadSeek> = Box::new(BufReader::new(file));
    let mut archive = ZipArchive::new(reader).map_err(|e| InventoryError::zip(label.clone(), e))?;

    for entry in entries {
        label = format!("{}{}{}", label, NESTED_SEPARATOR, entry);
        let bytes = {
            let nested = archive
                .by_name(entry)
                .map_err(|e| InventoryError::zip(label.clone(), e))?;
            let consumed = consume_entry(nested, MAX_NESTED_ARCHIVE_SIZE)
                .map_err(|e| InventoryError::io(label.clone(), e))?;
            consumed.bytes.ok_or_else(|| {
                InventoryError::io(
                    label.clone(),
                    io::Error::new(io::ErrorKind::InvalidData, "nested archive too large"),
                )
            })?
        };
        let reader: Box<dyn ReadSeek> = Box::new(Cursor::new(bytes));
        archive = ZipArchive::new(reader).map_err(|e| InventoryError::zip(label.clone(), e))?;
    }

    Ok(archive)
}

/// Reads an entry to the end exactly once, hashing as it goes.
///
/// The bytes are kept when the entry fits within `limit`.
pub fn consume_entry<R: Read>(reader: R, limit: u64) -> io::Result<ConsumedEntry> {
    let mut digest = DigestReader::new(reader);
    let mut buffer = Vec::new();
    (&mut digest).take(limit + 1).read_to_end(&mut buffer)?;

    let bytes = if digest.bytes_read() > limit {
        io::copy(&mut digest, &mut io::sink())?;
        None
    } else {
        Some(buffer)
    };

    Ok(ConsumedEntry {
        digests: digest.finish(),
        bytes,
    })
}

/// Main manifest attributes of an opened archive; empty when there is none.
pub fn read_manifest<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
) -> io::Result<BTreeMap<String, String>> {
    match archive.by_name(MANIFEST_ENTRY) {
        Ok(entry) => read_main_attributes(entry),
        Err(zip::result::ZipError::FileNotFound) => Ok(BTreeMap::new()),
        Err(e) => Err(io::Error::new(io::ErrorKind::InvalidData, e)),
    }
}
