/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the pipelines use to reach the
/// metadata store, the resolution and merge engines, the file system and
/// the console.
pub mod call_graph_merger;
pub mod dependency_resolver;
pub mod input_reader;
pub mod metadata_store;
pub mod output_writer;
pub mod progress_reporter;

pub use call_graph_merger::CallGraphMerger;
pub use dependency_resolver::{DependencyResolver, ResolverConfig, ResolverDepth};
pub use input_reader::{CallGraphFiles, CallGraphReader, SeedListReader};
pub use metadata_store::{MetadataStore, ReleaseRecord};
pub use output_writer::OutputWriter;
pub use progress_reporter::ProgressReporter;
