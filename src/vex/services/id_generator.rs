use super::canonical::CanonicalRepresentationBuilder;
use crate::shared::error::VexError;
use crate::vex::domain::{Document, Iri};

/// Prefix of canonical content-hash document ids.
pub const CANONICAL_ID_PREFIX: &str = "https://openvex.dev/docs/public/vex-";

/// Strategy producing the `@id` of a document.
///
/// Any `Fn(&Document) -> Result<Iri, VexError>` closure is a generator, which
/// lets authors assign externally meaningful ids instead of content hashes.
pub trait DocumentIdGenerator {
    fn generate(&self, document: &Document) -> Result<Iri, VexError>;
}

impl<F> DocumentIdGenerator for F
where
    F: Fn(&Document) -> Result<Iri, VexError>,
{
    fn generate(&self, document: &Document) -> Result<Iri, VexError> {
        self(document)
    }
}

/// Default generator: `https://openvex.dev/docs/public/vex-<sha256 of canonical form>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalDocumentIdGenerator;

impl DocumentIdGenerator for CanonicalDocumentIdGenerator {
    fn generate(&self, document: &Document) -> Result<Iri, VexError> {
        let hash = CanonicalRepresentationBuilder::hash(document)?;
        Iri::parse(format!("{}{}", CANONICAL_ID_PREFIX, hash))
    }
}
