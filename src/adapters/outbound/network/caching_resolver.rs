use crate::pipeline::domain::{Release, ResolvedRelease};
use crate::ports::outbound::{DependencyResolver, ResolverConfig};
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingDependencyResolver wraps a DependencyResolver and caches dependency sets.
///
/// A dependent reached from several seeds has its dependencies resolved
/// once per run. Dependents are always resolved fresh, and failures are
/// never cached.
pub struct CachingDependencyResolver<R: DependencyResolver> {
    inner: R,
    dependencies: Arc<DashMap<Release, Vec<ResolvedRelease>>>,
}

impl<R: DependencyResolver> CachingDependencyResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            dependencies: Arc::new(DashMap::new()),
        }
    }

    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.dependencies.len()
    }
}

#[async_trait]
impl<R: DependencyResolver> DependencyResolver for CachingDependencyResolver<R> {
    async fn resolve_dependents(
        &self,
        release: &Release,
        config: ResolverConfig,
    ) -> Result<Vec<ResolvedRelease>> {
        self.inner.resolve_dependents(release, config).await
    }

    async fn resolve_dependencies(&self, release: &Release) -> Result<Vec<ResolvedRelease>> {
        if let Some(cached) = self.dependencies.get(release) {
            return Ok(cached.clone());
        }

        let resolved = self.inner.resolve_dependencies(release).await?;
        self.dependencies.insert(release.clone(), resolved.clone());

        Ok(resolved)
    }
}
