use crate::vex::domain::Document;
use std::path::PathBuf;

/// A validated document that carries an `@id`, with the file it came from.
#[derive(Debug, Clone)]
pub struct IdentifiedDocument {
    pub source: PathBuf,
    pub document: Document,
    /// Whether `@id` was computed during this run
    pub id_generated: bool,
}

/// IdentifyResponse - Internal response DTO from the identification use case
#[derive(Debug, Clone, Default)]
pub struct IdentifyResponse {
    pub documents: Vec<IdentifiedDocument>,
}

impl IdentifyResponse {
    pub fn new(documents: Vec<IdentifiedDocument>) -> Self {
        Self { documents }
    }
}
