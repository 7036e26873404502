use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::pipeline::services::{CallGraphAnalysis, SeedCallGraphs};
use crate::ports::outbound::{CallGraphReader, OutputWriter, ProgressReporter};
use crate::shared::Result;
use std::path::Path;

const DEPENDENT_PERCENTAGE_FILE: &str = "dependent-percentage.bin";
const DEGREE_FILE: &str = "degree.bin";
const EIGENVECTOR_FILE: &str = "eigenvector.bin";

/// AnalyseCallGraphsUseCase - scores a seed's callables over its generated call graphs
///
/// Every seed directory of the `input/` tree is analysed on its own: all
/// dependent call graphs are unioned, then dependent percentage, degree
/// centrality and eigenvector centrality are computed for the callables of
/// the seed release.
pub struct AnalyseCallGraphsUseCase<CR, OW, PR> {
    reader: CR,
    output_writer: OW,
    progress_reporter: PR,
}

impl<CR, OW, PR> AnalyseCallGraphsUseCase<CR, OW, PR>
where
    CR: CallGraphReader,
    OW: OutputWriter,
    PR: ProgressReporter,
{
    pub fn new(reader: CR, output_writer: OW, progress_reporter: PR) -> Self {
        Self {
            reader,
            output_writer,
            progress_reporter,
        }
    }

    /// # Errors
    /// Returns an error if the input directory cannot be listed
    pub fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        let mut response = AnalysisResponse::default();
        let seed_dirs = self.reader.list_seed_directories(&request.input_dir)?;
        let total = seed_dirs.len();

        for (idx, seed_dir) in seed_dirs.iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some("Analysing call graphs"));

            match self.analyse_seed(seed_dir, &request.output_dir) {
                Ok(Some(label)) => response.analysed.push(label),
                Ok(None) => response.skipped += 1,
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "❌ Failed to analyse {}: {}",
                        seed_dir.display(),
                        e
                    ));
                    response.skipped += 1;
                }
            }
        }

        self.progress_reporter.report_completion(&format!(
            "Analysis complete: {} seed(s) analysed, {} skipped",
            response.analysed.len(),
            response.skipped
        ));

        Ok(response)
    }

    /// Returns the label of the analysed seed, or `None` if there was nothing to analyse
    fn analyse_seed(&self, seed_dir: &Path, output_dir: &Path) -> Result<Option<String>> {
        let Some(label) = seed_dir
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(CallGraphAnalysis::label_from_directory)
        else {
            self.progress_reporter.report_error(&format!(
                "⚠️  Skipping {}: not a group_artifact_version directory",
                seed_dir.display()
            ));
            return Ok(None);
        };

        let mut data = SeedCallGraphs::default();
        for files in self.reader.read_call_graphs(seed_dir)? {
            data.add_pair(&files.uris, &files.callgraph);
        }

        if CallGraphAnalysis::seed_ids(&data, &label).is_empty() {
            self.progress_reporter
                .report(&format!("No callables of {} found, skipping.", label));
            return Ok(None);
        }

        let target = output_dir.join(&label);
        let percentage = CallGraphAnalysis::dependent_percentage(&data, &label);
        self.output_writer.write_lines(
            &target.join(DEPENDENT_PERCENTAGE_FILE),
            &CallGraphAnalysis::to_lines(&percentage),
        )?;

        let degree = CallGraphAnalysis::degree_centrality(&data, &label);
        self.output_writer
            .write_lines(&target.join(DEGREE_FILE), &CallGraphAnalysis::to_lines(&degree))?;

        let eigenvector = CallGraphAnalysis::eigenvector_centrality(&data, &label);
        self.output_writer.write_lines(
            &target.join(EIGENVECTOR_FILE),
            &CallGraphAnalysis::to_lines(&eigenvector),
        )?;

        Ok(Some(label))
    }
}
