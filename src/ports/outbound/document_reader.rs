use crate::shared::Result;
use std::path::Path;

/// DocumentReader port for loading raw VEX documents
///
/// Implementations return the undecoded JSON text; parsing happens in the
/// application layer so every source goes through the same codec.
pub trait DocumentReader {
    /// Reads the document stored at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file exceeds the size limit for VEX documents
    /// - The file cannot be read due to permissions or I/O errors
    fn read_document(&self, path: &Path) -> Result<String>;
}
