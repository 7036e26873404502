/// Subprocess adapters for external engines
mod command_merger;

pub use command_merger::CommandCallGraphMerger;
