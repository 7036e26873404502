use crate::shared::Result;
use std::path::Path;

/// OutputWriter port for persisting pipeline results
pub trait OutputWriter {
    /// Writes `lines` to `path`, one per line
    ///
    /// Missing parent directories are created and an existing file is
    /// replaced, so re-running a pipeline overwrites its previous output.
    ///
    /// # Errors
    /// Returns an error if the directories or the file cannot be written
    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<()>;
}
