mod call_graph_analysis;
mod deduplicator;
mod dependent_capper;
mod dependent_count_report;
mod output_layout;
mod random_source;
mod weighted_sampler;

pub use call_graph_analysis::{CallGraphAnalysis, Scores, SeedCallGraphs};
pub use deduplicator::{DedupKey, Deduplicator};
pub use dependent_capper::{DependentCapper, DEFAULT_MAX_DEPENDENTS};
pub use dependent_count_report::DependentCountReport;
pub use output_layout::OutputLayout;
pub use random_source::random_source;
pub use weighted_sampler::WeightedSampler;
