pub mod call_graph;
pub mod release;
pub mod resolution;
pub mod sample_set;
pub mod weighted_candidate;

pub use call_graph::MergedCallGraph;
pub use release::{Release, ResolvedRelease, Scope};
pub use resolution::Resolution;
pub use sample_set::{SampleConfig, SampleSet};
pub use weighted_candidate::WeightedCandidate;
