use std::collections::BTreeMap;

/// Attribute key for the SHA-512 digest of the archive bytes
pub const SHA512_ATTRIBUTE: &str = "sha512Checksum";
/// Attribute key for the SHA-256 digest of the archive bytes
pub const SHA256_ATTRIBUTE: &str = "sha256Checksum";
pub const NAME_ATTRIBUTE: &str = "name";
pub const PATH_ATTRIBUTE: &str = "path";

/// ArchiveRecord value object describing one archive observed at runtime
///
/// Identity is the content hash (hex SHA-512). The locator is provenance
/// only: two records with different locators and the same content hash
/// describe the same artifact.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveRecord {
    locator: String,
    content_hash: String,
    attributes: BTreeMap<String, String>,
}

impl ArchiveRecord {
    pub fn new(
        locator: String,
        content_hash: String,
        attributes: BTreeMap<String, String>,
    ) -> Self {
        Self {
            locator,
            content_hash,
            attributes,
        }
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }

    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}
