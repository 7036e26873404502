//! callgraph-sampler - release sampling and call-graph collection for package ecosystems
//!
//! This library draws weighted samples of package releases from a time
//! window and, for a list of seed releases, resolves their dependents and
//! each dependent's dependencies before building merged call graphs.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`pipeline`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use callgraph_sampler::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let use_case = GenerateCallGraphsUseCase::new(
//!     FileSystemReader::new(),
//!     CachingDependencyResolver::new(RestDependencyResolver::new("http://localhost:8080")?),
//!     CommandCallGraphMerger::new("callgraph-merger", "/data/callables", "tmp")?,
//!     FileSystemWriter::new(),
//!     StdoutProgressReporter::new(false),
//!     OutputLayout::new("."),
//! );
//!
//! let request = GenerationRequest::new("seeds.txt", ResolverDepth::Transitive).with_seed(Some(42));
//! let response = use_case.execute(request).await?;
//! println!("{} call graphs written", response.call_graphs_written());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod pipeline;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StdoutProgressReporter;
    pub use crate::adapters::outbound::database::SqliteMetadataStore;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
    pub use crate::adapters::outbound::network::{
        CachingDependencyResolver, RestDependencyResolver,
    };
    pub use crate::adapters::outbound::process::CommandCallGraphMerger;
    pub use crate::application::dto::{
        AnalysisRequest, AnalysisResponse, GenerationRequest, GenerationResponse, SeedOutcome,
        SelectionRequest, SelectionResponse,
    };
    pub use crate::application::use_cases::{
        AnalyseCallGraphsUseCase, GenerateCallGraphsUseCase, SelectArtefactsUseCase,
    };
    pub use crate::pipeline::domain::{
        MergedCallGraph, Release, ResolvedRelease, Resolution, SampleConfig, SampleSet, Scope,
        WeightedCandidate,
    };
    pub use crate::pipeline::policies::{SeedMembership, SeedMembershipPolicy, TestArtifactPolicy};
    pub use crate::pipeline::services::{OutputLayout, WeightedSampler};
    pub use crate::ports::outbound::{
        CallGraphFiles, CallGraphMerger, CallGraphReader, DependencyResolver, MetadataStore,
        OutputWriter, ProgressReporter, ReleaseRecord, ResolverConfig, ResolverDepth,
        SeedListReader,
    };
    pub use crate::shared::Result;
}
