use crate::shared::error::VexError;
use crate::vex::domain::Document;

/// Checks a document is complete enough to be emitted.
///
/// Runs when a document is finalized, not on every mutation.
pub struct DocumentValidator;

impl DocumentValidator {
    /// # Errors
    /// - [`VexError::NoStatements`] when the document has no statements
    /// - [`VexError::MissingJustification`] for a `not_affected` statement with
    ///   neither justification nor impact statement
    /// - [`VexError::MissingActionStatement`] for an `affected` statement
    ///   without action statement
    pub fn validate(document: &Document) -> Result<(), VexError> {
        if document.statements().is_empty() {
            return Err(VexError::NoStatements);
        }

        for statement in document.statements() {
            statement.justification()?;
            statement.action_statement()?;
        }

        Ok(())
    }
}
