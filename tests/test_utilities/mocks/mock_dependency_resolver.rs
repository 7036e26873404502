use async_trait::async_trait;
use callgraph_sampler::prelude::*;
use std::collections::{HashMap, HashSet};

/// Mock DependencyResolver keyed by `group:artifact:version`
///
/// Coordinates marked as failing return an error from both lookups.
#[derive(Default)]
pub struct MockDependencyResolver {
    dependents: HashMap<String, Vec<ResolvedRelease>>,
    dependencies: HashMap<String, Vec<ResolvedRelease>>,
    failing: HashSet<String>,
}

impl MockDependencyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dependents(mut self, coordinate: &str, dependents: Vec<ResolvedRelease>) -> Self {
        self.dependents.insert(coordinate.to_string(), dependents);
        self
    }

    pub fn with_dependencies(
        mut self,
        coordinate: &str,
        dependencies: Vec<ResolvedRelease>,
    ) -> Self {
        self.dependencies
            .insert(coordinate.to_string(), dependencies);
        self
    }

    pub fn with_failure(mut self, coordinate: &str) -> Self {
        self.failing.insert(coordinate.to_string());
        self
    }

    fn lookup(
        &self,
        table: &HashMap<String, Vec<ResolvedRelease>>,
        release: &Release,
    ) -> Result<Vec<ResolvedRelease>> {
        let coordinate = release.coordinate();
        if self.failing.contains(&coordinate) {
            anyhow::bail!("resolver unavailable for {}", coordinate);
        }
        Ok(table.get(&coordinate).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl DependencyResolver for MockDependencyResolver {
    async fn resolve_dependents(
        &self,
        release: &Release,
        _config: ResolverConfig,
    ) -> Result<Vec<ResolvedRelease>> {
        self.lookup(&self.dependents, release)
    }

    async fn resolve_dependencies(&self, release: &Release) -> Result<Vec<ResolvedRelease>> {
        self.lookup(&self.dependencies, release)
    }
}
