//! vexid - OpenVEX documents with canonical content-hash identifiers
//!
//! This library models OpenVEX documents (statements about whether products
//! are affected by vulnerabilities) and derives a deterministic `@id` for a
//! document from its semantically relevant content, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`vex`): Document model, canonical representation and id generation
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): JSON codec, file system, console and formatters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use vexid::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let vulnerability = Vulnerability::new("CVE-2023-12345")?;
//! let product = Product::new(Iri::parse("pkg:apk/wolfi/git@2.39.0-r1?arch=x86_64")?);
//! let mut statement = Statement::new(vulnerability, vec![product], Status::NotAffected)?;
//! statement.set_justification(Some(Justification::ComponentNotPresent));
//!
//! let mut document = Document::authored_by("Wolfi J Inkinson")?;
//! document.add_statement(statement);
//!
//! let id = document.generate_canonical_id()?;
//! assert!(id.as_str().starts_with(CANONICAL_ID_PREFIX));
//!
//! let json = to_json_string(&document)?;
//! assert!(json.contains("\"@id\""));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod shared;
pub mod vex;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CanonicalFormatter, IdFormatter, JsonFormatter,
    };
    pub use crate::adapters::outbound::json::{parse_document, to_json, to_json_string};
    pub use crate::application::dto::{IdentifyRequest, IdentifyResponse, OutputFormat};
    pub use crate::application::use_cases::IdentifyDocumentsUseCase;
    pub use crate::ports::inbound::DocumentIdentificationPort;
    pub use crate::ports::outbound::{
        DocumentFormatter, DocumentReader, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::{ExitCode, VexError};
    pub use crate::shared::Result;
    pub use crate::vex::domain::{
        Component, Document, HashAlgorithm, Hashes, Identifiers, Iri, Justification, PackageUrl,
        Product, Statement, Status, Timestamp, Vulnerability,
    };
    pub use crate::vex::services::{
        CanonicalDocumentIdGenerator, CanonicalRepresentationBuilder, DocumentIdGenerator,
        DocumentValidator, CANONICAL_ID_PREFIX,
    };
}
