use std::collections::BTreeMap;

/// Merged directed call graph of a dependent and its dependencies
///
/// Node ids are the merge engine's global callable ids; `uris` maps every
/// merged node to its symbolic name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedCallGraph {
    edges: Vec<(i64, i64)>,
    uris: BTreeMap<i64, String>,
}

impl MergedCallGraph {
    pub fn new(edges: Vec<(i64, i64)>, uris: BTreeMap<i64, String>) -> Self {
        Self { edges, uris }
    }

    pub fn edges(&self) -> &[(i64, i64)] {
        &self.edges
    }

    pub fn uris(&self) -> &BTreeMap<i64, String> {
        &self.uris
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_count(&self) -> usize {
        self.uris.len()
    }

    /// `source,target` header followed by one row per edge
    pub fn edge_lines(&self) -> Vec<String> {
        std::iter::once("source,target".to_string())
            .chain(
                self.edges
                    .iter()
                    .map(|(source, target)| format!("{},{}", source, target)),
            )
            .collect()
    }

    /// `id,uri` header followed by one `id,"uri"` row per node
    pub fn uri_lines(&self) -> Vec<String> {
        std::iter::once("id,uri".to_string())
            .chain(
                self.uris
                    .iter()
                    .map(|(id, uri)| format!("{},\"{}\"", id, uri)),
            )
            .collect()
    }
}
