use super::archive_scanner::{ArchiveScanner, ScanResult};
use crate::inventory::domain::{ArchiveRecord, DependencyEdge, DependencyGraph, LibraryComponent};
use std::collections::HashSet;

/// LibraryInventory accumulates scan output across many root archives
///
/// Each root locator is scanned at most once. Components are kept in
/// discovery order, with structural duplicates dropped.
#[derive(Debug, Default)]
pub struct LibraryInventory {
    scanner: ArchiveScanner,
    examined: HashSet<String>,
    components: Vec<LibraryComponent>,
    graph: DependencyGraph,
}

impl LibraryInventory {
    pub fn new(scanner: ArchiveScanner) -> Self {
        Self {
            scanner,
            ..Self::default()
        }
    }

    /// Scans `root` unless it was already examined. Returns whether a scan ran.
    pub fn add(&mut self, root: &ArchiveRecord) -> bool {
        if !self.examined.insert(root.locator().to_string()) {
            return false;
        }
        self.absorb(self.scanner.scan(root));
        true
    }

    fn absorb(&mut self, result: ScanResult) {
        let (components, dependencies) = result.into_parts();
        for component in components {
            if !self.components.contains(&component) {
                self.components.push(component);
            }
        }
        for edge in dependencies {
            self.graph.add_edge(edge.from(), edge.to().iter().cloned());
        }
    }

    pub fn components(&self) -> &[LibraryComponent] {
        &self.components
    }

    pub fn examined_count(&self) -> usize {
        self.examined.len()
    }

    pub fn into_parts(self) -> (Vec<LibraryComponent>, Vec<DependencyEdge>) {
        (self.components, self.graph.into_edges())
    }
}
