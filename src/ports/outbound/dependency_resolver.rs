use crate::pipeline::domain::{Release, ResolvedRelease};
use crate::shared::Result;
use async_trait::async_trait;

/// How far dependent resolution follows the dependency graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverDepth {
    /// Only releases declaring the dependency themselves
    Direct,
    /// Releases reaching the dependency through any number of hops
    Transitive,
}

impl ResolverDepth {
    pub fn from_transitive_flag(transitive: bool) -> Self {
        if transitive {
            ResolverDepth::Transitive
        } else {
            ResolverDepth::Direct
        }
    }

    pub fn is_transitive(&self) -> bool {
        matches!(self, ResolverDepth::Transitive)
    }
}

/// Options for dependent resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    pub depth: ResolverDepth,
    /// Whether `provided`-scope edges are followed
    pub include_provided: bool,
}

impl ResolverConfig {
    pub fn new(depth: ResolverDepth) -> Self {
        Self {
            depth,
            include_provided: false,
        }
    }

    pub fn with_provided(mut self, include_provided: bool) -> Self {
        self.include_provided = include_provided;
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new(ResolverDepth::Direct)
    }
}

/// DependencyResolver port for the external dependency-resolution engine
///
/// Implementations are shared read-only for the whole run and must be
/// `Send + Sync`.
#[async_trait]
pub trait DependencyResolver: Send + Sync {
    /// Resolves the releases that depend on `release`
    ///
    /// # Errors
    /// Returns an error if the resolver cannot be reached or does not know
    /// the release. Callers isolate the failure to this one release.
    async fn resolve_dependents(
        &self,
        release: &Release,
        config: ResolverConfig,
    ) -> Result<Vec<ResolvedRelease>>;

    /// Resolves the full dependency set of `release`
    ///
    /// # Errors
    /// Returns an error if the resolver cannot be reached or does not know
    /// the release.
    async fn resolve_dependencies(&self, release: &Release) -> Result<Vec<ResolvedRelease>>;
}
