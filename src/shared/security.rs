use crate::shared::error::VexError;
use std::fs;
use std::path::Path;

/// Maximum size of a VEX document accepted from disk (16 MB)
pub const MAX_DOCUMENT_SIZE: u64 = 16 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist or its metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path) -> Result<fs::Metadata, VexError> {
    let metadata = fs::symlink_metadata(path).map_err(|e| VexError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if metadata.is_symlink() {
        return Err(VexError::SecurityError {
            path: path.to_path_buf(),
            reason: "Path is a symbolic link".to_string(),
            hint: "Pass the path of the document itself rather than a link to it".to_string(),
        });
    }

    if !metadata.is_file() {
        return Err(VexError::FileReadError {
            path: path.to_path_buf(),
            details: "not a regular file".to_string(),
        });
    }

    Ok(metadata)
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<(), VexError> {
    if file_size > max_size {
        return Err(VexError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "VEX documents are expected to be small JSON files".to_string(),
        });
    }
    Ok(())
}

/// Rejects writing through an existing symbolic link.
pub fn validate_not_symlink(path: &Path) -> Result<(), VexError> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(VexError::SecurityError {
            path: path.to_path_buf(),
            reason: "Output path is a symbolic link".to_string(),
            hint: "Write to a regular file path instead".to_string(),
        }),
        _ => Ok(()),
    }
}
