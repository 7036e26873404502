use crate::shared::error::PipelineError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of an input file (seed lists, configuration): 100 MB
pub const MAX_INPUT_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects a path that is a symbolic link.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A path that does not exist yet is accepted; callers writing new files
/// rely on that.
pub fn reject_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            anyhow::bail!(
                "Failed to read metadata for {} operation on {}: {}",
                operation,
                path.display(),
                e
            )
        }
    };

    if metadata.is_symlink() {
        return Err(PipelineError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Point the tool at the real file instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Checks that `path` exists, is a regular file, is not a symlink and is
/// no larger than `max_size` bytes.
pub fn validate_input_file(path: &Path, file_description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| PipelineError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(PipelineError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Point the tool at the real file instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(PipelineError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", file_description),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(PipelineError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} is too large ({} bytes, maximum {} bytes)",
                file_description,
                metadata.len(),
                max_size
            ),
            hint: "Split the input into smaller files".to_string(),
        }
        .into());
    }

    Ok(())
}
