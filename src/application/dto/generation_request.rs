use crate::pipeline::services::DEFAULT_MAX_DEPENDENTS;
use crate::ports::outbound::ResolverDepth;
use std::path::PathBuf;

/// GenerationRequest - request DTO for the call-graph generation use case
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// File listing one seed coordinate per line
    pub seed_file: PathBuf,
    /// Direct or transitive dependent resolution
    pub depth: ResolverDepth,
    /// Maximum number of dependents analysed per seed
    pub max_dependents: usize,
    /// Whether provided-scope dependents are followed
    pub include_provided: bool,
    /// Seed for the random source; entropy when absent
    pub seed: Option<u64>,
}

impl GenerationRequest {
    pub fn new(seed_file: impl Into<PathBuf>, depth: ResolverDepth) -> Self {
        Self {
            seed_file: seed_file.into(),
            depth,
            max_dependents: DEFAULT_MAX_DEPENDENTS,
            include_provided: false,
            seed: None,
        }
    }

    pub fn with_max_dependents(mut self, max_dependents: usize) -> Self {
        self.max_dependents = max_dependents;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_provided(mut self, include_provided: bool) -> Self {
        self.include_provided = include_provided;
        self
    }
}
