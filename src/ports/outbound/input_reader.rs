use crate::shared::Result;
use std::path::{Path, PathBuf};

/// SeedListReader port for reading the list of seed coordinates
pub trait SeedListReader {
    /// Reads the seed list file and returns its non-empty lines
    ///
    /// Lines are trimmed; blank lines and `#` comments are dropped. Lines
    /// are not parsed here so malformed coordinates can be reported one by one.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be read
    fn read_seed_list(&self, path: &Path) -> Result<Vec<String>>;
}

/// Contents of one `uris.csv` / `callgraph.csv` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallGraphFiles {
    pub uris: String,
    pub callgraph: String,
}

/// CallGraphReader port for reading a previously generated `input/` tree
pub trait CallGraphReader {
    /// Lists the seed directories below `input_dir`, sorted by name
    ///
    /// # Errors
    /// Returns an error if `input_dir` cannot be listed
    fn list_seed_directories(&self, input_dir: &Path) -> Result<Vec<PathBuf>>;

    /// Reads every dependent's call-graph pair inside `seed_dir`.
    /// Dependent directories missing either file are skipped.
    ///
    /// # Errors
    /// Returns an error if `seed_dir` cannot be listed or a file cannot be read
    fn read_call_graphs(&self, seed_dir: &Path) -> Result<Vec<CallGraphFiles>>;
}
