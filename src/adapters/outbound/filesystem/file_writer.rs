use crate::ports::outbound::OutputWriter;
use crate::shared::error::PipelineError;
use crate::shared::security::reject_symlink;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemWriter adapter for writing line-oriented output files
///
/// Parent directories are created on demand and existing files are
/// overwritten, so re-running a pipeline replaces its previous output.
/// Writing through a symbolic link is refused.
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_error(path: &Path, details: impl ToString) -> anyhow::Error {
        PipelineError::FileWriteError {
            path: path.to_path_buf(),
            details: details.to_string(),
        }
        .into()
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for FileSystemWriter {
    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                Self::write_error(
                    path,
                    format!("Failed to create directory {}: {}", parent.display(), e),
                )
            })?;
        }

        reject_symlink(path, "write")?;

        let mut content = lines.join("\n");
        if !lines.is_empty() {
            content.push('\n');
        }

        fs::write(path, content).map_err(|e| Self::write_error(path, e))?;
        Ok(())
    }
}
