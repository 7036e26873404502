use crate::pipeline::domain::MergedCallGraph;
use crate::shared::Result;
use async_trait::async_trait;

/// CallGraphMerger port for the external call-graph merge engine
#[async_trait]
pub trait CallGraphMerger: Send + Sync {
    /// Merges the call graphs of all `coordinates` into one directed graph
    ///
    /// # Arguments
    /// * `coordinates` - `group:artifact:version` strings; the dependencies
    ///   of a dependent followed by the dependent itself
    ///
    /// # Returns
    /// The merged edges together with the id-to-URI table of every merged node
    ///
    /// # Errors
    /// Returns an error if the engine fails or its output cannot be decoded
    async fn merge(&self, coordinates: &[String]) -> Result<MergedCallGraph>;
}
