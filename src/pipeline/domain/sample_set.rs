use super::Release;
use std::collections::HashSet;

/// Confidence level / margin of error pair and the sample size it requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleConfig {
    pub confidence: u8,
    pub margin: u8,
    pub size: usize,
}

impl SampleConfig {
    /// 95%/5%, 95%/3%, 99%/5% and 99%/3% for an unbounded population
    pub const CANONICAL: [SampleConfig; 4] = [
        SampleConfig::new(95, 5, 384),
        SampleConfig::new(95, 3, 1066),
        SampleConfig::new(99, 5, 660),
        SampleConfig::new(99, 3, 1831),
    ];

    pub const fn new(confidence: u8, margin: u8, size: usize) -> Self {
        Self {
            confidence,
            margin,
            size,
        }
    }

    pub fn file_name(&self) -> String {
        format!("artefacts_to_analyse-{}-{}.txt", self.confidence, self.margin)
    }
}

/// Releases drawn for one configuration, unique by identity
#[derive(Debug, Clone)]
pub struct SampleSet {
    config: SampleConfig,
    releases: Vec<Release>,
}

impl SampleSet {
    pub fn new(config: SampleConfig, releases: Vec<Release>) -> Self {
        Self { config, releases }
    }

    pub fn config(&self) -> SampleConfig {
        self.config
    }

    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn contains(&self, release: &Release) -> bool {
        self.releases.contains(release)
    }

    pub fn to_set(&self) -> HashSet<Release> {
        self.releases.iter().cloned().collect()
    }

    /// One `group:artifact:version` line per member
    pub fn to_lines(&self) -> Vec<String> {
        self.releases.iter().map(Release::coordinate).collect()
    }
}
