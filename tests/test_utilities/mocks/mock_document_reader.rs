use std::collections::HashMap;
use std::path::{Path, PathBuf};
use vexid::prelude::*;

/// Mock DocumentReader for testing, serving documents from memory
#[derive(Default)]
pub struct MockDocumentReader {
    pub documents: HashMap<PathBuf, String>,
    pub should_fail: bool,
}

impl MockDocumentReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, path: &str, content: &str) -> Self {
        self.documents
            .insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            documents: HashMap::new(),
            should_fail: true,
        }
    }
}

impl DocumentReader for MockDocumentReader {
    fn read_document(&self, path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock document read failure");
        }
        match self.documents.get(path) {
            Some(content) => Ok(content.clone()),
            None => anyhow::bail!("No mock document for {}", path.display()),
        }
    }
}
