use std::collections::BTreeMap;
use std::io::Read;

/// Location of the manifest inside an archive
pub const MANIFEST_ENTRY: &str = "META-INF/MANIFEST.MF";

pub const IMPLEMENTATION_VENDOR: &str = "Implementation-Vendor";
pub const IMPLEMENTATION_VENDOR_ID: &str = "Implementation-Vendor-Id";
pub const IMPLEMENTATION_TITLE: &str = "Implementation-Title";
pub const IMPLEMENTATION_VERSION: &str = "Implementation-Version";
pub const BUNDLE_SYMBOLIC_NAME: &str = "Bundle-SymbolicName";

/// Manifest attributes copied onto archive records
pub const RECORDED_ATTRIBUTES: [&str; 5] = [
    IMPLEMENTATION_VENDOR,
    IMPLEMENTATION_VENDOR_ID,
    IMPLEMENTATION_TITLE,
    IMPLEMENTATION_VERSION,
    BUNDLE_SYMBOLIC_NAME,
];

/// Parses the main section of a manifest.
///
/// Lines starting with a single space continue the previous value. Parsing
/// stops at the first blank line (start of the per-entry sections).
pub fn parse_main_attributes(text: &str) -> BTreeMap<String, String> {
    let mut attributes = BTreeMap::new();
    let mut current: Option<(String, String)> = None;

    for raw in text.lines() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.is_empty() {
            break;
        }
        if let Some(continuation) = line.strip_prefix(' ') {
            if let Some((_, value)) = current.as_mut() {
                value.push_str(continuation);
            }
            continue;
        }
        if let Some((key, value)) = current.take() {
            attributes.insert(key, value);
        }
        if let Some((key, value)) = line.split_once(':') {
            current = Some((key.trim().to_string(), value.trim_start().to_string()));
        }
    }
    if let Some((key, value)) = current {
        attributes.insert(key, value);
    }

    attributes
}

/// Reads and parses a manifest stream; invalid UTF-8 is replaced.
pub fn read_main_attributes<R: Read>(mut reader: R) -> std::io::Result<BTreeMap<String, String>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(parse_main_attributes(&String::from_utf8_lossy(&bytes)))
}

/// Keeps only the attributes worth reporting.
pub fn recorded_subset(attributes: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    RECORDED_ATTRIBUTES
        .iter()
        .filter_map(|key| {
            attributes
                .get(*key)
                .map(|value| (key.to_string(), value.clone()))
        })
        .collect()
}
