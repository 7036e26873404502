use crate::application::dto::{SelectionRequest, SelectionResponse};
use crate::pipeline::domain::{Release, WeightedCandidate};
use crate::pipeline::policies::TestArtifactPolicy;
use crate::pipeline::services::{
    random_source, DedupKey, Deduplicator, DependentCountReport, OutputLayout, WeightedSampler,
};
use crate::ports::outbound::{
    DependencyResolver, MetadataStore, OutputWriter, ProgressReporter, ReleaseRecord,
    ResolverConfig, ResolverDepth,
};
use crate::shared::Result;
use std::collections::HashSet;

/// SelectArtefactsUseCase - draws weighted samples of releases from a time window
///
/// Workflow:
/// 1. Fetch every release created in the sampling frame
/// 2. Sort oldest first, drop testing artefacts, keep the oldest release per group
/// 3. Weight each release by its number of distinct transitive dependent groups
/// 4. Store the dependent counts
/// 5. Draw one sample per configuration and store it
///
/// # Type Parameters
/// * `MS` - MetadataStore implementation
/// * `DR` - DependencyResolver implementation
/// * `OW` - OutputWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct SelectArtefactsUseCase<MS, DR, OW, PR> {
    metadata_store: MS,
    resolver: DR,
    output_writer: OW,
    progress_reporter: PR,
    layout: OutputLayout,
}

impl<MS, DR, OW, PR> SelectArtefactsUseCase<MS, DR, OW, PR>
where
    MS: MetadataStore,
    DR: DependencyResolver,
    OW: OutputWriter,
    PR: ProgressReporter,
{
    pub fn new(
        metadata_store: MS,
        resolver: DR,
        output_writer: OW,
        progress_reporter: PR,
        layout: OutputLayout,
    ) -> Self {
        Self {
            metadata_store,
            resolver,
            output_writer,
            progress_reporter,
            layout,
        }
    }

    /// Executes the selection pipeline
    ///
    /// # Errors
    /// Only a failing metadata store aborts the run. Resolution failures
    /// zero the affected weight, write failures are reported, and
    /// configurations with too small a population are skipped.
    pub async fn execute(&self, request: SelectionRequest) -> Result<SelectionResponse> {
        let mut response = SelectionResponse::default();

        // Step 1: Query the sampling frame
        let mut records = self
            .metadata_store
            .fetch_releases(request.start, request.end)?;
        response.retrieved = records.len();
        self.progress_reporter.report(&format!(
            "Retrieved {} artefacts from the database.",
            records.len()
        ));

        // Step 2: Oldest first, then filter
        records.sort_by_key(|record| record.created_at);
        let releases = self.to_releases(records, &mut response);
        let population = self.filter_population(releases, &mut response);

        // Step 3: Weights
        let config =
            ResolverConfig::new(ResolverDepth::Transitive).with_provided(request.include_provided);
        response.candidates = self.weigh_population(population, config).await?;

        // Step 4: Dependent counts
        self.write_or_report(
            &self.layout.dependents_count_file(),
            &DependentCountReport::lines(&response.candidates),
        );

        // Step 5: Samples
        self.draw_samples(&request, &mut response);

        self.progress_reporter.report_completion(&format!(
            "Selection complete: {} candidate(s), {} sample(s) written, {} configuration(s) skipped",
            response.candidates.len(),
            response.samples.len(),
            response.skipped_configs.len()
        ));

        Ok(response)
    }

    /// Builds releases from store rows, dropping rows with an unusable package name
    fn to_releases(
        &self,
        records: Vec<ReleaseRecord>,
        response: &mut SelectionResponse,
    ) -> Vec<Release> {
        let mut releases = Vec::with_capacity(records.len());

        for record in records {
            match Release::parse(&record.package_name) {
                Ok(package) => releases.push(
                    Release::new(package.group(), package.artifact(), record.version)
                        .with_created_at(record.created_at),
                ),
                Err(e) => {
                    response.malformed += 1;
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Skipping version {}: {}",
                        record.version_id, e
                    ));
                }
            }
        }

        releases
    }

    fn filter_population(
        &self,
        releases: Vec<Release>,
        response: &mut SelectionResponse,
    ) -> Vec<Release> {
        let before = releases.len();
        let without_tests = TestArtifactPolicy::exclude(releases, |r| r);
        response.test_artifacts_filtered = before - without_tests.len();
        self.progress_reporter.report(&format!(
            "Filtered {} testing artefacts.",
            response.test_artifacts_filtered
        ));

        let before = without_tests.len();
        let unique = Deduplicator::by_release(without_tests, DedupKey::Group, |r| r);
        response.duplicates_filtered = before - unique.len();
        self.progress_reporter.report(&format!(
            "Filtered {} non-unique artefacts.",
            response.duplicates_filtered
        ));

        unique
    }

    /// Weight = number of distinct groups among the non-test transitive dependents
    async fn weigh_population(
        &self,
        population: Vec<Release>,
        config: ResolverConfig,
    ) -> Result<Vec<WeightedCandidate>> {
        let total = population.len();
        let mut candidates = Vec::with_capacity(total);

        for (idx, release) in population.into_iter().enumerate() {
            match self.resolver.resolve_dependents(&release, config).await {
                Ok(dependents) => {
                    let groups: HashSet<&str> = dependents
                        .iter()
                        .map(|d| d.release())
                        .filter(|r| !TestArtifactPolicy::is_test_release(r))
                        .map(Release::group)
                        .collect();
                    let weight = groups.len() as f64;
                    candidates.push(WeightedCandidate::new(release, weight)?);
                }
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Could not resolve dependents of {}, weight set to 0: {}",
                        release, e
                    ));
                    candidates.push(WeightedCandidate::unweighted(release));
                }
            }

            self.progress_reporter
                .report_progress(idx + 1, total, Some("Counting dependents"));
        }

        Ok(candidates)
    }

    fn draw_samples(&self, request: &SelectionRequest, response: &mut SelectionResponse) {
        let sampler = WeightedSampler::new(response.candidates.clone());
        let mut rng = random_source(request.seed);

        for config in &request.configs {
            match sampler.sample(*config, &mut rng) {
                Ok(sample) => {
                    let path = self.layout.sample_file(config);
                    self.write_or_report(&path, &sample.to_lines());
                    self.progress_reporter.report(&format!(
                        "Sampled {} artefacts for {}% confidence, {}% margin of error.",
                        sample.len(),
                        config.confidence,
                        config.margin
                    ));
                    response.samples.push(sample);
                }
                Err(e) => {
                    self.progress_reporter.report_error(&format!("⚠️  {}", e));
                    response.skipped_configs.push(*config);
                }
            }
        }
    }

    fn write_or_report(&self, path: &std::path::Path, lines: &[String]) {
        if let Err(e) = self.output_writer.write_lines(path, lines) {
            self.progress_reporter.report_error(&format!("❌ {}", e));
        }
    }
}

#[cfg(test)]
mod tests;
