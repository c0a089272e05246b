use crate::shared::error::FsioError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum settings manifest size (10 MB)
pub const MAX_MANIFEST_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that an input path exists and is a regular file (not a directory or symlink)
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path doesn't exist, is a symbolic link, or is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e)
    })?;

    if metadata.is_symlink() {
        return Err(FsioError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Point the generator at the real file instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates that a generated file can be written at `path`
///
/// The parent directory must exist, and an existing output must not be a
/// symbolic link. A missing output file is fine; it is created on first write.
pub fn validate_output_path(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.is_dir() {
            return Err(FsioError::InvalidOutputPath {
                path: path.to_path_buf(),
                reason: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
    }

    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(FsioError::SecurityError {
            path: path.to_path_buf(),
            reason: "Output path is a symbolic link".to_string(),
            hint: "Remove the link or choose another output path".to_string(),
        }
        .into()),
        Ok(metadata) if metadata.is_dir() => Err(FsioError::InvalidOutputPath {
            path: path.to_path_buf(),
            reason: "Output path is a directory".to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}

/// Validates that the enum and getters outputs name two different files
///
/// Paths are compared as given and after resolving the parent directory, so
/// `out/e.h` and `out/../out/e.h` count as the same file.
pub fn validate_distinct_outputs(enum_path: &Path, getters_path: &Path) -> Result<()> {
    if enum_path == getters_path || resolve_output(enum_path) == resolve_output(getters_path) {
        return Err(FsioError::InvalidOutputPath {
            path: getters_path.to_path_buf(),
            reason: format!(
                "Getters output is the same file as the enum output ({})",
                enum_path.display()
            ),
        }
        .into());
    }
    Ok(())
}

fn resolve_output(path: &Path) -> PathBuf {
    let parent = match path.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => Path::new("."),
    };
    match (fs::canonicalize(parent), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}
