use async_trait::async_trait;
use callgraph_sampler::prelude::*;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock CallGraphMerger building one callable per coordinate
///
/// The last coordinate (the dependent) calls every other coordinate's
/// callable. URIs follow `fasten://mvn!group:artifact$version/...`.
#[derive(Default, Clone)]
pub struct MockCallGraphMerger {
    pub calls: Arc<Mutex<Vec<Vec<String>>>>,
    failing: HashSet<String>,
}

impl MockCallGraphMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails every merge whose dependent is `coordinate`
    pub fn with_failure(mut self, coordinate: &str) -> Self {
        self.failing.insert(coordinate.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

fn uri_for(coordinate: &str) -> String {
    let mut parts = coordinate.splitn(3, ':');
    let group = parts.next().unwrap_or_default();
    let artifact = parts.next().unwrap_or_default();
    let version = parts.next().unwrap_or_default();
    format!("fasten://mvn!{}:{}${}/pkg/Type.call()", group, artifact, version)
}

#[async_trait]
impl CallGraphMerger for MockCallGraphMerger {
    async fn merge(&self, coordinates: &[String]) -> Result<MergedCallGraph> {
        self.calls.lock().unwrap().push(coordinates.to_vec());

        let Some(dependent) = coordinates.last() else {
            anyhow::bail!("no coordinates to merge");
        };
        if self.failing.contains(dependent) {
            anyhow::bail!("merger crashed on {}", dependent);
        }

        let uris: BTreeMap<i64, String> = coordinates
            .iter()
            .enumerate()
            .map(|(idx, coordinate)| (idx as i64 + 1, uri_for(coordinate)))
            .collect();
        let caller = coordinates.len() as i64;
        let edges = (1..caller).map(|callee| (caller, callee)).collect();

        Ok(MergedCallGraph::new(edges, uris))
    }
}
