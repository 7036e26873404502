use crate::pipeline::domain::{Release, SampleConfig};
use std::path::{Path, PathBuf};

const DEPENDENTS_COUNT_FILE: &str = "dependents-count.txt";
const INPUT_DIR: &str = "input";

/// OutputLayout maps pipeline results to their deterministic file paths
///
/// ```text
/// {root}/dependents-count.txt
/// {root}/artefacts_to_analyse-{conf}-{error}.txt
/// {root}/input/{seed}/dependents.txt
/// {root}/input/{seed}/{dependent}/dependencies.txt
/// {root}/input/{seed}/{dependent}/callgraph.csv
/// {root}/input/{seed}/{dependent}/uris.csv
/// ```
///
/// where `{seed}` and `{dependent}` are `group_artifact_version`.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dependents_count_file(&self) -> PathBuf {
        self.root.join(DEPENDENTS_COUNT_FILE)
    }

    pub fn sample_file(&self, config: &SampleConfig) -> PathBuf {
        self.root.join(config.file_name())
    }

    pub fn input_dir(&self) -> PathBuf {
        self.root.join(INPUT_DIR)
    }

    pub fn seed_dir(&self, seed: &Release) -> PathBuf {
        self.input_dir().join(seed.directory_name())
    }

    pub fn dependents_file(&self, seed: &Release) -> PathBuf {
        self.seed_dir(seed).join("dependents.txt")
    }

    pub fn pair_dir(&self, seed: &Release, dependent: &Release) -> PathBuf {
        self.seed_dir(seed).join(dependent.directory_name())
    }

    pub fn dependencies_file(&self, seed: &Release, dependent: &Release) -> PathBuf {
        self.pair_dir(seed, dependent).join("dependencies.txt")
    }

    pub fn callgraph_file(&self, seed: &Release, dependent: &Release) -> PathBuf {
        self.pair_dir(seed, dependent).join("callgraph.csv")
    }

    pub fn uris_file(&self, seed: &Release, dependent: &Release) -> PathBuf {
        self.pair_dir(seed, dependent).join("uris.csv")
    }
}
