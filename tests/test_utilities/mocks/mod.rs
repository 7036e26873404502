/// Mock implementations for testing
mod mock_call_graph_merger;
mod mock_dependency_resolver;
mod mock_metadata_store;
mod mock_progress_reporter;

pub use mock_call_graph_merger::MockCallGraphMerger;
pub use mock_dependency_resolver::MockDependencyResolver;
pub use mock_metadata_store::MockMetadataStore;
pub use mock_progress_reporter::MockProgressReporter;
