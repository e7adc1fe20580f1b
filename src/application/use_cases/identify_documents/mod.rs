use crate::adapters::outbound::json::parse_document;
use crate::application::dto::{IdentifiedDocument, IdentifyRequest, IdentifyResponse};
use crate::ports::inbound::DocumentIdentificationPort;
use crate::ports::outbound::{DocumentReader, ProgressReporter};
use crate::shared::error::VexError;
use crate::shared::Result;
use crate::vex::domain::Document;
use crate::vex::services::{
    CanonicalDocumentIdGenerator, DocumentIdGenerator, DocumentValidator, CANONICAL_ID_PREFIX,
};
use anyhow::Context;
use std::path::Path;

/// IdentifyDocumentsUseCase - loads VEX documents and assigns their `@id`
///
/// # Type Parameters
/// * `DR` - DocumentReader implementation
/// * `PR` - ProgressReporter implementation
pub struct IdentifyDocumentsUseCase<DR, PR> {
    document_reader: DR,
    progress_reporter: PR,
    id_generator: Box<dyn DocumentIdGenerator>,
}

impl<DR, PR> IdentifyDocumentsUseCase<DR, PR>
where
    DR: DocumentReader,
    PR: ProgressReporter,
{
    /// Creates the use case with the canonical content-hash id generator
    pub fn new(document_reader: DR, progress_reporter: PR) -> Self {
        Self {
            document_reader,
            progress_reporter,
            id_generator: Box::new(CanonicalDocumentIdGenerator),
        }
    }

    /// Replaces the id generator used for documents without an `@id`
    pub fn with_id_generator(mut self, id_generator: Box<dyn DocumentIdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    /// Executes the identification use case
    ///
    /// Documents are processed in request order. The first failure aborts
    /// the whole batch.
    pub fn execute(&self, request: IdentifyRequest) -> Result<IdentifyResponse> {
        Self::validate_request(&request)?;

        let total = request.inputs.len();
        let mut documents = Vec::with_capacity(total);

        for (index, path) in request.inputs.iter().enumerate() {
            if total > 1 {
                self.progress_reporter.report_progress(
                    index,
                    total,
                    Some(&path.display().to_string()),
                );
            }

            let identified = self
                .identify_one(path, &request)
                .with_context(|| format!("Failed to identify {}", path.display()))?;
            documents.push(identified);
        }

        if total > 1 {
            self.progress_reporter.report_progress(total, total, None);
        }
        self.progress_reporter
            .report_completion(&format!("✅ Identified {} document(s)", documents.len()));

        Ok(IdentifyResponse::new(documents))
    }

    fn validate_request(request: &IdentifyRequest) -> Result<()> {
        if request.inputs.is_empty() {
            return Err(VexError::Validation {
                message: "at least one VEX document is required".to_string(),
            }
            .into());
        }
        if let Some(tooling) = &request.tooling {
            if tooling.trim().is_empty() {
                return Err(VexError::Validation {
                    message: "tooling cannot be empty".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    fn identify_one(&self, path: &Path, request: &IdentifyRequest) -> Result<IdentifiedDocument> {
        let content = self.document_reader.read_document(path)?;
        let mut document = parse_document(&content)?;

        if request.bump_version {
            document.increment_version();
        }
        if let Some(tooling) = &request.tooling {
            document.set_tooling(Some(tooling.clone()));
        }

        DocumentValidator::validate(&document)?;

        if request.regenerate_id {
            document.set_id(None);
        } else {
            self.warn_if_stale(&document, path);
        }

        let id_generated = document.id().is_none();
        if id_generated {
            document.generate_id(self.id_generator.as_ref())?;
        }

        Ok(IdentifiedDocument {
            source: path.to_path_buf(),
            document,
            id_generated,
        })
    }

    /// Warns when a content-hash id no longer matches the document content.
    fn warn_if_stale(&self, document: &Document, path: &Path) {
        let Some(existing) = document.id() else {
            return;
        };
        if !existing.as_str().starts_with(CANONICAL_ID_PREFIX) {
            return;
        }
        if let Ok(expected) = CanonicalDocumentIdGenerator.generate(document) {
            if &expected != existing {
                self.progress_reporter.report_warning(&format!(
                    "⚠️  Warning: {} has a canonical @id that does not match its content. Use --regenerate-id to replace it.",
                    path.display()
                ));
            }
        }
    }
}

impl<DR, PR> DocumentIdentificationPort for IdentifyDocumentsUseCase<DR, PR>
where
    DR: DocumentReader,
    PR: ProgressReporter,
{
    fn identify(&self, request: IdentifyRequest) -> Result<IdentifyResponse> {
        self.execute(request)
    }
}

#[cfg(test)]
mod tests;
