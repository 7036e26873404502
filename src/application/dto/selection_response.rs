use crate::pipeline::domain::{SampleConfig, SampleSet, WeightedCandidate};

/// SelectionResponse - result of the artefact selection use case
#[derive(Debug, Clone, Default)]
pub struct SelectionResponse {
    /// Rows returned by the metadata store
    pub retrieved: usize,
    /// Rows whose package name could not be split into group and artifact
    pub malformed: usize,
    /// Rows dropped as testing-framework artefacts
    pub test_artifacts_filtered: usize,
    /// Rows dropped because an older release of the same group was kept
    pub duplicates_filtered: usize,
    /// Weighted population the samples were drawn from
    pub candidates: Vec<WeightedCandidate>,
    /// One sample per configuration that could be drawn
    pub samples: Vec<SampleSet>,
    /// Configurations skipped because the population was too small
    pub skipped_configs: Vec<SampleConfig>,
}

impl SelectionResponse {
    /// Number of candidates whose weight could not be resolved or is zero
    pub fn unweighted_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.weight() == 0.0).count()
    }
}
