use crate::ports::outbound::{CallGraphFiles, CallGraphReader, SeedListReader};
use crate::shared::error::PipelineError;
use crate::shared::security::{validate_input_file, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

const CALLGRAPH_FILE: &str = "callgraph.csv";
const URIS_FILE: &str = "uris.csv";

/// FileSystemReader adapter for reading seed lists and generated call graphs
///
/// Every file is validated before it is read: symbolic links, non-regular
/// files and files above the size limit are rejected.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn safe_read_file(&self, path: &Path, file_description: &str) -> Result<String> {
        validate_input_file(path, file_description, MAX_INPUT_FILE_SIZE)?;
        fs::read_to_string(path).map_err(|e| {
            PipelineError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Sub-directories of `dir`, sorted by name
    fn sub_directories(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| PipelineError::FileReadError {
            path: dir.to_path_buf(),
            details: e.to_string(),
        })?;

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry?;
            // file_type() does not follow symlinks
            if entry.file_type()?.is_dir() {
                dirs.push(entry.path());
            }
        }
        dirs.sort();
        Ok(dirs)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedListReader for FileSystemReader {
    fn read_seed_list(&self, path: &Path) -> Result<Vec<String>> {
        let content = self.safe_read_file(path, "Seed list")?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }
}

impl CallGraphReader for FileSystemReader {
    fn list_seed_directories(&self, input_dir: &Path) -> Result<Vec<PathBuf>> {
        self.sub_directories(input_dir)
    }

    fn read_call_graphs(&self, seed_dir: &Path) -> Result<Vec<CallGraphFiles>> {
        let mut pairs = Vec::new();
        for dependent_dir in self.sub_directories(seed_dir)? {
            let callgraph = dependent_dir.join(CALLGRAPH_FILE);
            let uris = dependent_dir.join(URIS_FILE);
            if !callgraph.is_file() || !uris.is_file() {
                continue;
            }
            pairs.push(CallGraphFiles {
                uris: self.safe_read_file(&uris, "URI table")?,
                callgraph: self.safe_read_file(&callgraph, "Call graph")?,
            });
        }
        Ok(pairs)
    }
}
