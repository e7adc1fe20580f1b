use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;
use crate::vex::domain::Document;
use crate::vex::services::CanonicalRepresentationBuilder;

/// CanonicalFormatter adapter emitting the string a document's id is hashed from
///
/// Handy for comparing two implementations byte for byte.
pub struct CanonicalFormatter;

impl CanonicalFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CanonicalFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for CanonicalFormatter {
    fn format(&self, document: &Document) -> Result<String> {
        Ok(CanonicalRepresentationBuilder::build(document)?)
    }
}
