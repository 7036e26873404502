use super::*;
use crate::pipeline::domain::{ResolvedRelease, SampleConfig};
use crate::shared::error::PipelineError;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// Mock implementations for testing
struct MockMetadataStore {
    records: Vec<ReleaseRecord>,
    fail: bool,
}

impl MetadataStore for MockMetadataStore {
    fn fetch_releases(
        &self,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Vec<ReleaseRecord>> {
        if self.fail {
            anyhow::bail!("connection refused");
        }
        Ok(self.records.clone())
    }
}

/// Dependents per `group:artifact:version`; coordinates listed in `failing` raise
struct MockResolver {
    dependents: HashMap<String, Vec<ResolvedRelease>>,
    failing: Vec<String>,
}

#[async_trait::async_trait]
impl DependencyResolver for MockResolver {
    async fn resolve_dependents(
        &self,
        release: &Release,
        config: ResolverConfig,
    ) -> Result<Vec<ResolvedRelease>> {
        assert!(config.depth.is_transitive());
        if self.failing.contains(&release.coordinate()) {
            return Err(PipelineError::ResolutionFailure {
                what: "dependents".to_string(),
                coordinate: release.coordinate(),
                details: "timeout".to_string(),
            }
            .into());
        }
        Ok(self
            .dependents
            .get(&release.coordinate())
            .cloned()
            .unwrap_or_default())
    }

    async fn resolve_dependencies(&self, _release: &Release) -> Result<Vec<ResolvedRelease>> {
        Ok(Vec::new())
    }
}

#[derive(Default)]
struct MockOutputWriter {
    files: Mutex<HashMap<PathBuf, Vec<String>>>,
}

impl MockOutputWriter {
    fn file(&self, path: &Path) -> Option<Vec<String>> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl OutputWriter for &MockOutputWriter {
    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), lines.to_vec());
        Ok(())
    }
}

#[derive(Default)]
struct MockProgressReporter {
    errors: Mutex<Vec<String>>,
}

impl ProgressReporter for &MockProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
    fn report_completion(&self, _message: &str) {}
}

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 3, d, 0, 0, 0).unwrap()
}

fn record(id: i64, package: &str, version: &str, created: u32) -> ReleaseRecord {
    ReleaseRecord::new(id, package, version, day(created))
}

fn dependents(groups: &[&str]) -> Vec<ResolvedRelease> {
    groups
        .iter()
        .enumerate()
        .map(|(i, g)| ResolvedRelease::compile(Release::new(*g, format!("app{}", i), "1.0")))
        .collect()
}

fn request(configs: Vec<SampleConfig>) -> SelectionRequest {
    SelectionRequest::new(day(1), day(31))
        .unwrap()
        .with_configs(configs)
        .with_seed(Some(7))
}

#[tokio::test]
async fn test_execute_samples_and_writes_files() {
    let store = MockMetadataStore {
        records: vec![
            record(1, "org.a:lib", "1.0", 1),
            record(2, "org.b:core", "2.0", 2),
            record(3, "org.c:util", "3.0", 3),
        ],
        fail: false,
    };
    let resolver = MockResolver {
        dependents: HashMap::from([
            ("org.a:lib:1.0".to_string(), dependents(&["x", "y"])),
            ("org.b:core:2.0".to_string(), dependents(&["x"])),
            ("org.c:util:3.0".to_string(), dependents(&["z"])),
        ]),
        failing: vec![],
    };
    let writer = MockOutputWriter::default();
    let reporter = MockProgressReporter::default();
    let layout = OutputLayout::new("/out");
    let use_case = SelectArtefactsUseCase::new(store, resolver, &writer, &reporter, layout.clone());

    let config = SampleConfig::new(95, 5, 2);
    let response = use_case.execute(request(vec![config])).await.unwrap();

    assert_eq!(response.retrieved, 3);
    assert_eq!(response.candidates.len(), 3);
    assert_eq!(response.samples.len(), 1);
    assert_eq!(response.samples[0].len(), 2);
    assert!(response.skipped_configs.is_empty());

    let sample_lines = writer.file(&layout.sample_file(&config)).unwrap();
    assert_eq!(sample_lines.len(), 2);
    for line in &sample_lines {
        let release = Release::parse(line).unwrap();
        assert!(["org.a", "org.b", "org.c"].contains(&release.group()));
    }

    let counts = writer.file(&layout.dependents_count_file()).unwrap();
    assert_eq!(
        counts,
        vec![
            "org.b:core:2.0,1".to_string(),
            "org.c:util:3.0,1".to_string(),
            "org.a:lib:1.0,2".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_execute_filters_test_artefacts_and_keeps_oldest_per_group() {
    let store = MockMetadataStore {
        records: vec![
            record(1, "org.a:lib", "2.0", 5),
            record(2, "org.a:lib", "1.0", 2),
            record(3, "org.junit:core", "5.0", 1),
            record(4, "org.b:mockito-bridge", "1.0", 1),
            record(5, "org.c:util", "1.0", 3),
        ],
        fail: false,
    };
    let resolver = MockResolver {
        dependents: HashMap::new(),
        failing: vec![],
    };
    let writer = MockOutputWriter::default();
    let reporter = MockProgressReporter::default();
    let use_case =
        SelectArtefactsUseCase::new(store, resolver, &writer, &reporter, OutputLayout::new("/o"));

    let response = use_case.execute(request(vec![])).await.unwrap();

    assert_eq!(response.test_artifacts_filtered, 2);
    assert_eq!(response.duplicates_filtered, 1);
    let releases: Vec<String> = response
        .candidates
        .iter()
        .map(|c| c.release().coordinate())
        .collect();
    assert_eq!(releases, vec!["org.a:lib:1.0", "org.c:util:1.0"]);
}

#[tokio::test]
async fn test_execute_ignores_test_dependents_when_weighing() {
    let store = MockMetadataStore {
        records: vec![record(1, "org.a:lib", "1.0", 1)],
        fail: false,
    };
    let mut deps = dependents(&["org.x", "org.x", "org.test"]);
    deps.push(ResolvedRelease::compile(Release::new("org.y", "mock-server", "1.0")));
    let resolver = MockResolver {
        dependents: HashMap::from([("org.a:lib:1.0".to_string(), deps)]),
        failing: vec![],
    };
    let writer = MockOutputWriter::default();
    let reporter = MockProgressReporter::default();
    let use_case =
        SelectArtefactsUseCase::new(store, resolver, &writer, &reporter, OutputLayout::new("/o"));

    let response = use_case.execute(request(vec![])).await.unwrap();

    assert_eq!(response.candidates[0].weight(), 1.0);
}

#[tokio::test]
async fn test_execute_resolution_failure_zeroes_weight() {
    let store = MockMetadataStore {
        records: vec![
            record(1, "org.a:lib", "1.0", 1),
            record(2, "org.b:core", "1.0", 2),
        ],
        fail: false,
    };
    let resolver = MockResolver {
        dependents: HashMap::from([("org.b:core:1.0".to_string(), dependents(&["x"]))]),
        failing: vec!["org.a:lib:1.0".to_string()],
    };
    let writer = MockOutputWriter::default();
    let reporter = MockProgressReporter::default();
    let use_case =
        SelectArtefactsUseCase::new(store, resolver, &writer, &reporter, OutputLayout::new("/o"));

    let response = use_case
        .execute(request(vec![SampleConfig::new(95, 5, 1)]))
        .await
        .unwrap();

    assert_eq!(response.unweighted_count(), 1);
    assert_eq!(response.samples.len(), 1);
    assert_eq!(
        response.samples[0].releases()[0],
        Release::new("org.b", "core", "1.0")
    );
    assert!(reporter
        .errors
        .lock()
        .unwrap()
        .iter()
        .any(|e| e.contains("org.a:lib:1.0")));
}

#[tokio::test]
async fn test_execute_skips_configuration_larger_than_population() {
    let store = MockMetadataStore {
        records: vec![
            record(1, "org.a:lib", "1.0", 1),
            record(2, "org.b:core", "1.0", 2),
        ],
        fail: false,
    };
    let resolver = MockResolver {
        dependents: HashMap::from([
            ("org.a:lib:1.0".to_string(), dependents(&["x"])),
            ("org.b:core:1.0".to_string(), dependents(&["y"])),
        ]),
        failing: vec![],
    };
    let writer = MockOutputWriter::default();
    let reporter = MockProgressReporter::default();
    let layout = OutputLayout::new("/o");
    let use_case = SelectArtefactsUseCase::new(store, resolver, &writer, &reporter, layout.clone());

    let small = SampleConfig::new(95, 5, 2);
    let large = SampleConfig::new(99, 3, 1831);
    let response = use_case.execute(request(vec![small, large])).await.unwrap();

    assert_eq!(response.samples.len(), 1);
    assert_eq!(response.skipped_configs, vec![large]);
    assert!(writer.file(&layout.sample_file(&small)).is_some());
    assert!(writer.file(&layout.sample_file(&large)).is_none());
    assert!(reporter
        .errors
        .lock()
        .unwrap()
        .iter()
        .any(|e| e.contains("Not enough artefacts")));
}

#[tokio::test]
async fn test_execute_counts_malformed_package_names() {
    let store = MockMetadataStore {
        records: vec![
            record(1, "no-separator", "1.0", 1),
            record(2, "org.a:lib", "1.0", 2),
        ],
        fail: false,
    };
    let resolver = MockResolver {
        dependents: HashMap::new(),
        failing: vec![],
    };
    let writer = MockOutputWriter::default();
    let reporter = MockProgressReporter::default();
    let use_case =
        SelectArtefactsUseCase::new(store, resolver, &writer, &reporter, OutputLayout::new("/o"));

    let response = use_case.execute(request(vec![])).await.unwrap();

    assert_eq!(response.malformed, 1);
    assert_eq!(response.candidates.len(), 1);
}

#[tokio::test]
async fn test_execute_store_failure_is_fatal() {
    let store = MockMetadataStore {
        records: vec![],
        fail: true,
    };
    let resolver = MockResolver {
        dependents: HashMap::new(),
        failing: vec![],
    };
    let writer = MockOutputWriter::default();
    let reporter = MockProgressReporter::default();
    let use_case =
        SelectArtefactsUseCase::new(store, resolver, &writer, &reporter, OutputLayout::new("/o"));

    let result = use_case.execute(request(vec![])).await;

    assert!(result.is_err());
    assert!(writer.files.lock().unwrap().is_empty());
}
