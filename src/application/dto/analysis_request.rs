use std::path::PathBuf;

/// AnalysisRequest - request DTO for the call-graph analysis use case
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// The `input/` tree written by call-graph generation
    pub input_dir: PathBuf,
    /// Directory receiving one sub-directory per analysed seed
    pub output_dir: PathBuf,
}

impl AnalysisRequest {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }
}

/// AnalysisResponse - result of the call-graph analysis use case
#[derive(Debug, Clone, Default)]
pub struct AnalysisResponse {
    /// Release labels (`group:artifact$version`) that were analysed
    pub analysed: Vec<String>,
    /// Seed directories skipped (unreadable, unnamed or without own callables)
    pub skipped: usize,
}
