use crate::pipeline::domain::{Release, ResolvedRelease, Resolution};

/// Per-seed result of the call-graph generation use case
#[derive(Debug, Clone)]
pub struct SeedOutcome {
    pub seed: Release,
    /// Dependents kept after filtering, deduplication and capping
    pub dependents: Resolution<ResolvedRelease>,
    /// Dependents whose dependency set contains the seed
    pub validated: Vec<Release>,
    /// Dependents dropped because the seed is missing from their dependencies
    pub dropped: usize,
    /// Dependents whose dependencies could not be resolved
    pub dependency_failures: usize,
    /// Call graphs merged and written
    pub call_graphs_written: usize,
    /// Call graphs that failed to merge or write
    pub call_graph_failures: usize,
}

impl SeedOutcome {
    pub fn new(seed: Release, dependents: Resolution<ResolvedRelease>) -> Self {
        Self {
            seed,
            dependents,
            validated: Vec::new(),
            dropped: 0,
            dependency_failures: 0,
            call_graphs_written: 0,
            call_graph_failures: 0,
        }
    }
}

/// GenerationResponse - result of the call-graph generation use case
#[derive(Debug, Clone, Default)]
pub struct GenerationResponse {
    /// Seed list lines that could not be parsed
    pub malformed_seeds: Vec<String>,
    /// One entry per parsed seed, in input order
    pub seeds: Vec<SeedOutcome>,
}

impl GenerationResponse {
    pub fn seed(&self, seed: &Release) -> Option<&SeedOutcome> {
        self.seeds.iter().find(|outcome| &outcome.seed == seed)
    }

    pub fn failed_seed_count(&self) -> usize {
        self.seeds
            .iter()
            .filter(|outcome| outcome.dependents.is_failed())
            .count()
    }

    pub fn dependent_count(&self) -> usize {
        self.seeds.iter().map(|outcome| outcome.dependents.len()).sum()
    }

    pub fn validated_count(&self) -> usize {
        self.seeds.iter().map(|outcome| outcome.validated.len()).sum()
    }

    pub fn call_graphs_written(&self) -> usize {
        self.seeds
            .iter()
            .map(|outcome| outcome.call_graphs_written)
            .sum()
    }

    pub fn call_graph_failures(&self) -> usize {
        self.seeds
            .iter()
            .map(|outcome| outcome.call_graph_failures)
            .sum()
    }
}
