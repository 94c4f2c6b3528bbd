use std::collections::{BTreeMap, BTreeSet};

/// DependencyEdge value object: one component and the components it declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    from: String,
    to: BTreeSet<String>,
}

impl DependencyEdge {
    pub fn new(from: String, to: BTreeSet<String>) -> Self {
        Self { from, to }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &BTreeSet<String> {
        &self.to
    }
}

/// DependencyGraph aggregate collecting edges keyed by their `from` bomRef
///
/// Repeated declarations merge by set union; adding an edge twice is a no-op.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `from` with the given targets, merging into any existing edge.
    pub fn add_edge<I, S>(&mut self, from: &str, to: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.edges
            .entry(from.to_string())
            .or_default()
            .extend(to.into_iter().map(Into::into));
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn into_edges(self) -> Vec<DependencyEdge> {
        self.edges
            .into_iter()
            .map(|(from, to)| DependencyEdge::new(from, to))
            .collect()
    }
}
