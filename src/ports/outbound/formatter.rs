use crate::shared::Result;
use crate::vex::domain::Document;

/// DocumentFormatter port for rendering an identified document
///
/// Formatters receive documents that have already been validated and carry
/// an `@id`.
pub trait DocumentFormatter {
    /// Renders `document` to text
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, document: &Document) -> Result<String>;
}
