mod canonical;
mod id_generator;
mod validation;

pub use canonical::CanonicalRepresentationBuilder;
pub use id_generator::{CanonicalDocumentIdGenerator, DocumentIdGenerator, CANONICAL_ID_PREFIX};
pub use validation::DocumentValidator;
