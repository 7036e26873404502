use crate::application::dto::{GenerationRequest, GenerationResponse, SeedOutcome};
use crate::pipeline::domain::{Release, ResolvedRelease, Resolution};
use crate::pipeline::policies::{SeedMembership, SeedMembershipPolicy, TestArtifactPolicy};
use crate::pipeline::services::{
    random_source, DedupKey, Deduplicator, DependentCapper, OutputLayout,
};
use crate::ports::outbound::{
    CallGraphMerger, DependencyResolver, OutputWriter, ProgressReporter, ResolverConfig,
    SeedListReader,
};
use crate::shared::Result;
use rand::Rng;
use std::path::Path;

/// GenerateCallGraphsUseCase - dependent → dependency → call-graph fan-out
///
/// For every seed release, three sequential stages run:
/// 1. Dependent discovery: resolve, drop testing artefacts, keep one
///    dependent per group and cap the set
/// 2. Dependency discovery: resolve each dependent's dependencies, drop
///    testing artefacts, keep one release per `group:artifact`
/// 3. Call-graph fan-out: merge each validated dependent with its
///    dependencies and store edges and URIs
///
/// Failures are isolated to the seed, dependent or pair they occur in.
///
/// # Type Parameters
/// * `SR` - SeedListReader implementation
/// * `DR` - DependencyResolver implementation
/// * `CM` - CallGraphMerger implementation
/// * `OW` - OutputWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateCallGraphsUseCase<SR, DR, CM, OW, PR> {
    seed_reader: SR,
    resolver: DR,
    merger: CM,
    output_writer: OW,
    progress_reporter: PR,
    layout: OutputLayout,
}

impl<SR, DR, CM, OW, PR> GenerateCallGraphsUseCase<SR, DR, CM, OW, PR>
where
    SR: SeedListReader,
    DR: DependencyResolver,
    CM: CallGraphMerger,
    OW: OutputWriter,
    PR: ProgressReporter,
{
    pub fn new(
        seed_reader: SR,
        resolver: DR,
        merger: CM,
        output_writer: OW,
        progress_reporter: PR,
        layout: OutputLayout,
    ) -> Self {
        Self {
            seed_reader,
            resolver,
            merger,
            output_writer,
            progress_reporter,
            layout,
        }
    }

    /// Executes the generation pipeline
    ///
    /// # Errors
    /// Returns an error only if the seed list cannot be read.
    pub async fn execute(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        let mut response = GenerationResponse::default();

        // Step 1: Seeds
        let lines = self.seed_reader.read_seed_list(&request.seed_file)?;
        let seeds = self.parse_seeds(lines, &mut response);
        self.progress_reporter
            .report(&format!("Read {} seed release(s).", seeds.len()));

        let config = ResolverConfig::new(request.depth).with_provided(request.include_provided);
        let mut rng = random_source(request.seed);
        let total = seeds.len();

        // Step 2: Per-seed stages
        for (idx, seed) in seeds.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(&seed.coordinate()));

            let dependents = self
                .discover_dependents(&seed, config, request.max_dependents, &mut rng)
                .await;
            let mut outcome = SeedOutcome::new(seed, dependents);
            self.process_dependents(&mut outcome).await;
            response.seeds.push(outcome);
        }

        self.progress_reporter.report_completion(&format!(
            "Generation complete: {} seed(s) ({} failed), {} dependent(s), {} validated, {} call graph(s) written, {} failed",
            response.seeds.len(),
            response.failed_seed_count(),
            response.dependent_count(),
            response.validated_count(),
            response.call_graphs_written(),
            response.call_graph_failures()
        ));

        Ok(response)
    }

    fn parse_seeds(&self, lines: Vec<String>, response: &mut GenerationResponse) -> Vec<Release> {
        let mut seeds = Vec::with_capacity(lines.len());
        for line in lines {
            match Release::parse(&line) {
                Ok(seed) => seeds.push(seed),
                Err(e) => {
                    self.progress_reporter
                        .report_error(&format!("⚠️  Skipping seed: {}", e));
                    response.malformed_seeds.push(line);
                }
            }
        }
        seeds
    }

    /// Stage 1
    async fn discover_dependents<R: Rng + ?Sized>(
        &self,
        seed: &Release,
        config: ResolverConfig,
        max_dependents: usize,
        rng: &mut R,
    ) -> Resolution<ResolvedRelease> {
        let dependents = match self.resolver.resolve_dependents(seed, config).await {
            Ok(dependents) => dependents,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "❌ Exception while resolving dependents of {}: {}",
                    seed, e
                ));
                return Resolution::failed(e.to_string());
            }
        };

        let filtered = TestArtifactPolicy::exclude(dependents, ResolvedRelease::release);
        let unique = Deduplicator::by_release(filtered, DedupKey::Group, ResolvedRelease::release);
        let capped = DependentCapper::cap(unique, max_dependents, rng);

        let lines: Vec<String> = capped
            .iter()
            .map(|d| d.release().directory_name())
            .collect();
        self.write_or_report(&self.layout.dependents_file(seed), &lines);

        self.progress_reporter.report(&format!(
            "Resolved {} dependent(s) of {}.",
            capped.len(),
            seed
        ));

        Resolution::from_items(capped, "no dependents left after filtering")
    }

    /// Stages 2 and 3 for every dependent of one seed
    async fn process_dependents(&self, outcome: &mut SeedOutcome) {
        let seed = outcome.seed.clone();
        let dependents: Vec<Release> = outcome
            .dependents
            .items()
            .iter()
            .map(|d| d.release().clone())
            .collect();

        for dependent in dependents {
            let dependencies = match self.discover_dependencies(&dependent).await {
                Resolution::Resolved(dependencies) => dependencies,
                Resolution::Failed { .. } => {
                    outcome.dependency_failures += 1;
                    continue;
                }
                Resolution::Empty { .. } => Vec::new(),
            };

            if SeedMembershipPolicy::check(&seed, &dependencies) == SeedMembership::Absent {
                outcome.dropped += 1;
                continue;
            }

            let lines: Vec<String> = dependencies
                .iter()
                .map(|d| d.release().directory_name())
                .collect();
            self.write_or_report(&self.layout.dependencies_file(&seed, &dependent), &lines);

            match self.build_call_graph(&seed, &dependent, &dependencies).await {
                Ok(()) => outcome.call_graphs_written += 1,
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "❌ Call graph of {} for seed {} failed: {}",
                        dependent, seed, e
                    ));
                    outcome.call_graph_failures += 1;
                }
            }
            outcome.validated.push(dependent);
        }
    }

    /// Stage 2
    async fn discover_dependencies(&self, dependent: &Release) -> Resolution<ResolvedRelease> {
        match self.resolver.resolve_dependencies(dependent).await {
            Ok(dependencies) => {
                let filtered = TestArtifactPolicy::exclude(dependencies, ResolvedRelease::release);
                let unique =
                    Deduplicator::by_release(filtered, DedupKey::Package, ResolvedRelease::release);
                Resolution::from_items(unique, "no dependencies left after filtering")
            }
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "❌ Exception while resolving dependencies of {}: {}",
                    dependent, e
                ));
                Resolution::failed(e.to_string())
            }
        }
    }

    /// Stage 3
    async fn build_call_graph(
        &self,
        seed: &Release,
        dependent: &Release,
        dependencies: &[ResolvedRelease],
    ) -> Result<()> {
        let mut coordinates: Vec<String> = dependencies
            .iter()
            .map(|d| d.release().coordinate())
            .collect();
        coordinates.push(dependent.coordinate());

        let graph = self.merger.merge(&coordinates).await?;

        self.output_writer
            .write_lines(&self.layout.callgraph_file(seed, dependent), &graph.edge_lines())?;
        self.output_writer
            .write_lines(&self.layout.uris_file(seed, dependent), &graph.uri_lines())?;

        Ok(())
    }

    fn write_or_report(&self, path: &Path, lines: &[String]) {
        if let Err(e) = self.output_writer.write_lines(path, lines) {
            self.progress_reporter.report_error(&format!("❌ {}", e));
        }
    }
}
