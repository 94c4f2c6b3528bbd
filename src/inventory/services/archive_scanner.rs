use super::archive_io::{consume_entry, open_archive, read_manifest, MAX_NESTED_ARCHIVE_SIZE};
use super::descriptor_parser::{
    is_pom_entry, is_pom_properties_entry, parse_pom, parse_pom_properties,
};
use super::manifest::{IMPLEMENTATION_TITLE, IMPLEMENTATION_VENDOR_ID};
use crate::inventory::domain::archive_locator::NESTED_SEPARATOR;
use crate::inventory::domain::archive_record::SHA256_ATTRIBUTE;
use crate::inventory::domain::{
    is_archive_name, ArchiveLocator, ArchiveRecord, ComponentHash, Coordinates, DependencyEdge,
    DependencyGraph, HashAlgorithm, LibraryComponent, PackageDescriptor,
};
use crate::shared::error::InventoryError;
use std::collections::{BTreeMap, BTreeSet};
use std::io::{Cursor, Read, Seek};
use tracing::{debug, info};
use zip::ZipArchive;

/// Components and dependency edges found in one archive tree
#[derive(Debug, Default)]
pub struct ScanResult {
    components: Vec<LibraryComponent>,
    dependencies: Vec<DependencyEdge>,
}

impl ScanResult {
    pub fn components(&self) -> &[LibraryComponent] {
        &self.components
    }

    pub fn dependencies(&self) -> &[DependencyEdge] {
        &self.dependencies
    }

    pub fn into_parts(self) -> (Vec<LibraryComponent>, Vec<DependencyEdge>) {
        (self.components, self.dependencies)
    }
}

/// Working identity of an archive while its metadata is gathered
///
/// Later sources override earlier ones: file name, then manifest, then
/// `pom.properties`, then `pom.xml`.
#[derive(Debug, Default, Clone)]
struct IdentityDraft {
    group: Option<String>,
    name: Option<String>,
    version: Option<String>,
}

impl IdentityDraft {
    fn from_file_name(entry_name: &str) -> Self {
        let file_name = entry_name.rsplit('/').next().unwrap_or(entry_name);
        let stem = file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(file_name);

        let split = stem
            .match_indices('-')
            .map(|(i, _)| i)
            .find(|&i| stem[i + 1..].starts_with(|c: char| c.is_ascii_digit()));

        match split {
            Some(i) if i > 0 => Self {
                group: None,
                name: Some(stem[..i].to_string()),
                version: Some(stem[i + 1..].to_string()),
            },
            _ => Self {
                group: None,
                name: Some(stem.to_string()),
                version: None,
            },
        }
    }

    /// Guess from a descriptor path such as `META-INF/maven/com.x/lib-a/pom.xml`.
    fn from_descriptor_path(entry_name: &str) -> Self {
        let parts: Vec<&str> = entry_name.split('/').collect();
        match parts.as_slice() {
            ["META-INF", "maven", group, artifact, _] => Self {
                group: Some(group.to_string()),
                name: Some(artifact.to_string()),
                version: None,
            },
            _ => Self::default(),
        }
    }

    fn apply_manifest(&mut self, manifest: &BTreeMap<String, String>) {
        if let Some(group) = manifest.get(IMPLEMENTATION_VENDOR_ID) {
            self.group = Some(group.clone());
        }
        if let Some(title) = manifest.get(IMPLEMENTATION_TITLE) {
            self.name = Some(title.clone());
        }
    }

    /// Overrides only the fields the descriptor declares.
    fn apply_coordinates(&mut self, coordinates: &Coordinates) {
        if let Some(group) = coordinates.group() {
            self.group = Some(group.to_string());
        }
        self.name = Some(coordinates.artifact().to_string());
        if let Some(version) = coordinates.version() {
            self.version = Some(version.to_string());
        }
    }

    fn fill_missing(&mut self, fallback: IdentityDraft) {
        self.group = self.group.take().or(fallback.group);
        self.name = self.name.take().or(fallback.name);
        self.version = self.version.take().or(fallback.version);
    }

    fn bom_ref(&self) -> Option<String> {
        let group = self.group.as_deref()?;
        let name = self.name.as_deref()?;
        Some(crate::inventory::domain::bom_ref(group, name, self.version.as_deref()))
    }

    fn into_component(self, codesource: String) -> LibraryComponent {
        let name = self.name.unwrap_or_else(|| codesource.clone());
        LibraryComponent::new(self.group, name, self.version, codesource)
    }
}

/// Accumulates output for one scan
#[derive(Default)]
struct ScanState {
    components: Vec<LibraryComponent>,
    graph: DependencyGraph,
}

impl ScanState {
    fn push(&mut self, component: LibraryComponent) {
        if !self.components.contains(&component) {
            self.components.push(component);
        }
    }

    /// Records the descriptor's declarations against the current identity,
    /// or against the codesource when the identity has no group.
    fn record_edges(
        &mut self,
        draft: &IdentityDraft,
        descriptor: &PackageDescriptor,
        codesource: &str,
    ) {
        let from = draft.bom_ref().unwrap_or_else(|| codesource.to_string());
        self.graph.add_edge(&from, descriptor.dependency_refs());
    }
}

/// ArchiveScanner walks an archive and every archive nested inside it
///
/// Each nested archive becomes one component occurrence. Package descriptors
/// found directly in the root describe the root itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArchiveScanner;

impl ArchiveScanner {
    pub fn new() -> Self {
        Self
    }

    /// Scans the archive behind `root`.
    ///
    /// Never fails: an unreadable root yields an empty result and a corrupt
    /// nested entry is skipped. Components left without a hash inherit the
    /// root's own hashes.
    pub fn scan(&self, root: &ArchiveRecord) -> ScanResult {
        let locator = match ArchiveLocator::parse(root.locator()) {
            Some(locator) => locator,
            None => {
                info!(codesource = %root.locator(), "Unusual codesource detected");
                return ScanResult::default();
            }
        };

        let mut archive = match open_archive(locator.path(), locator.entries()) {
            Ok(archive) => archive,
            Err(e) => {
                info!(codesource = %root.locator(), error = %e, "Unusual codesource detected");
                return ScanResult::default();
            }
        };

        let mut state = ScanState::default();
        self.scan_archive(&mut archive, &locator.to_string(), true, &mut state);

        let root_hashes = root_hashes(root);
        for component in state.components.iter_mut() {
            component.inherit_hashes(&root_hashes);
        }

        debug!(
            codesource = %root.locator(),
            components = state.components.len(),
            edges = state.graph.len(),
            "scan finished"
        );

        ScanResult {
            components: state.components,
            dependencies: state.graph.into_edges(),
        }
    }

    fn scan_archive<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        container: &str,
        is_root: bool,
        state: &mut ScanState,
    ) {
        for index in 0..archive.len() {
            let entry = match archive.by_index(index) {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(container = %container, index, error = %e, "unreadable entry skipped");
                    continue;
                }
            };
            if entry.is_dir() {
                continue;
            }
            let name = entry.name().to_string();

            if is_archive_name(&name) {
                if let Err(e) = self.scan_nested(entry, container, &name, state) {
                    debug!(
                        entry = %name,
                        codesource = %container,
                        error = %e,
                        "Problem extracting metadata, continuing"
                    );
                }
            } else if is_root && is_pom_entry(&name) {
                self.scan_root_descriptor(entry, container, &name, state);
            }
        }
    }

    fn scan_root_descriptor<R: Read>(
        &self,
        mut entry: R,
        container: &str,
        name: &str,
        state: &mut ScanState,
    ) {
        let codesource = format!("{}{}{}", container, NESTED_SEPARATOR, name);
        let mut xml = String::new();
        if let Err(e) = entry.read_to_string(&mut xml) {
            debug!(codesource = %codesource, error = %e, "unreadable package descriptor");
            return;
        }

        let mut draft = IdentityDraft::from_descriptor_path(name);
        match parse_pom(&xml, &codesource) {
            Ok(descriptor) => {
                draft.apply_coordinates(descriptor.coordinates());
                state.record_edges(&draft, &descriptor, &codesource);
            }
            Err(e) => debug!(error = %e, "package descriptor skipped"),
        }
        if draft.name.is_some() {
            state.push(draft.into_component(codesource));
        }
    }

    fn scan_nested<E: Read>(
        &self,
        entry: E,
        container: &str,
        name: &str,
        state: &mut ScanState,
    ) -> Result<(), InventoryError> {
        let codesource = format!("{}{}{}", container, NESTED_SEPARATOR, name);
        debug!(entry = %name, "inner archive");

        let consumed = consume_entry(entry, MAX_NESTED_ARCHIVE_SIZE)
            .map_err(|e| InventoryError::io(codesource.clone(), e))?;
        let mut draft = IdentityDraft::from_file_name(name);

        let bytes = match consumed.bytes {
            Some(bytes) => bytes,
            None => {
                debug!(codesource = %codesource, "nested archive too large to inspect");
                state.push(
                    draft
                        .into_component(codesource)
                        .with_hashes(consumed.digests.hashes()),
                );
                return Ok(());
            }
        };

        let mut inner = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| InventoryError::zip(codesource.clone(), e))?;

        let manifest = read_manifest(&mut inner).unwrap_or_else(|e| {
            debug!(
                codesource = %codesource,
                error = %e,
                "unreadable manifest, continuing without it"
            );
            BTreeMap::new()
        });
        draft.apply_manifest(&manifest);

        let descriptors = collect_descriptors(&mut inner, &codesource);
        if descriptors.poms.is_empty() {
            if let Some(coordinates) = descriptors.properties.last() {
                draft.apply_coordinates(coordinates);
            }
        }
        for (entry_name, descriptor) in &descriptors.poms {
            draft.apply_coordinates(descriptor.coordinates());
            draft.fill_missing(IdentityDraft::from_descriptor_path(entry_name));
            state.record_edges(&draft, descriptor, &codesource);
        }

        state.push(
            draft
                .into_component(codesource.clone())
                .with_hashes(consumed.digests.hashes()),
        );

        self.scan_archive(&mut inner, &codesource, false, state);
        Ok(())
    }
}

struct Descriptors {
    /// Parsed `pom.xml` files with their entry names
    poms: Vec<(String, PackageDescriptor)>,
    properties: Vec<Coordinates>,
}

/// Reads every package descriptor stored directly in `archive`.
fn collect_descriptors<R: Read + Seek>(archive: &mut ZipArchive<R>, codesource: &str) -> Descriptors {
    let mut descriptors = Descriptors {
        poms: Vec::new(),
        properties: Vec::new(),
    };

    for index in 0..archive.len() {
        let Ok(mut entry) = archive.by_index(index) else {
            continue;
        };
        let name = entry.name().to_string();
        let is_pom = is_pom_entry(&name);
        if entry.is_dir() || !(is_pom || is_pom_properties_entry(&name)) {
            continue;
        }

        let mut text = String::new();
        if entry.read_to_string(&mut text).is_err() {
            debug!(codesource = %codesource, entry = %name, "unreadable package descriptor");
            continue;
        }

        if is_pom {
            let location = format!("{}{}{}", codesource, NESTED_SEPARATOR, name);
            match parse_pom(&text, &location) {
                Ok(descriptor) => descriptors.poms.push((name, descriptor)),
                Err(e) => debug!(error = %e, "package descriptor skipped"),
            }
        } else if let Some(coordinates) = parse_pom_properties(&text) {
            descriptors.properties.push(coordinates);
        }
    }

    descriptors
}

fn root_hashes(root: &ArchiveRecord) -> BTreeSet<ComponentHash> {
    let mut hashes = BTreeSet::new();
    if !root.content_hash().is_empty() {
        hashes.insert(ComponentHash::new(
            HashAlgorithm::Sha512,
            root.content_hash().to_string(),
        ));
    }
    if let Some(sha256) = root.attribute(SHA256_ATTRIBUTE) {
        hashes.insert(ComponentHash::new(HashAlgorithm::Sha256, sha256.to_string()));
    }
    hashes
}
