use crate::ports::outbound::DocumentReader;
use crate::shared::error::VexError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_DOCUMENT_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading VEX documents from disk
///
/// Refuses symbolic links, non-regular files and files above
/// [`MAX_DOCUMENT_SIZE`].
pub struct FileSystemReader {
    max_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_size: MAX_DOCUMENT_SIZE,
        }
    }

    /// Reader with a custom size limit in bytes.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for FileSystemReader {
    fn read_document(&self, path: &Path) -> Result<String> {
        let metadata = validate_regular_file(path)?;
        validate_file_size(metadata.len(), path, self.max_size)?;

        let content = fs::read_to_string(path).map_err(|e| VexError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_document_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("vex.json");
        fs::write(&path, "{\"author\": \"a\"}").unwrap();

        let content = FileSystemReader::new().read_document(&path).unwrap();
        assert_eq!(content, "{\"author\": \"a\"}");
    }

    #[test]
    fn test_read_document_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_document(&temp_dir.path().join("missing.json"));

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VexError>(),
            Some(VexError::FileReadError { .. })
        ));
    }

    #[test]
    fn test_read_document_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_document(temp_dir.path());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_read_document_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("vex.json");
        fs::write(&path, "0123456789").unwrap();

        let result = FileSystemReader::with_max_size(5).read_document(&path);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_document_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = FileSystemReader::new().read_document(&link).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VexError>(),
            Some(VexError::SecurityError { .. })
        ));
    }
}
