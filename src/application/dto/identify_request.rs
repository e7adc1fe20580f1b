use std::path::PathBuf;

/// IdentifyRequest - Internal request DTO for the identification use case
#[derive(Debug, Clone, Default)]
pub struct IdentifyRequest {
    /// VEX documents to identify, processed in order
    pub inputs: Vec<PathBuf>,
    /// Recompute `@id` even when the document already has one
    pub regenerate_id: bool,
    /// Increment the document version before hashing
    pub bump_version: bool,
    /// Replacement for the `tooling` field
    pub tooling: Option<String>,
}

impl IdentifyRequest {
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            ..Self::default()
        }
    }

    pub fn with_regenerate_id(mut self, regenerate_id: bool) -> Self {
        self.regenerate_id = regenerate_id;
        self
    }

    pub fn with_bump_version(mut self, bump_version: bool) -> Self {
        self.bump_version = bump_version;
        self
    }

    pub fn with_tooling(mut self, tooling: Option<String>) -> Self {
        self.tooling = tooling;
        self
    }
}
