use crate::ports::outbound::DocumentFormatter;
use crate::shared::error::VexError;
use crate::shared::Result;
use crate::vex::domain::Document;

/// IdFormatter adapter emitting only the document `@id`
pub struct IdFormatter;

impl IdFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IdFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for IdFormatter {
    fn format(&self, document: &Document) -> Result<String> {
        let id = document
            .id()
            .ok_or(VexError::MissingRequired { field: "@id" })?;
        Ok(id.to_string())
    }
}
