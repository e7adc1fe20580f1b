pub mod component;
pub mod document;
pub mod hashes;
pub mod iri;
pub mod purl;
pub mod statement;
pub mod timestamp;
pub mod vulnerability;

pub use component::{Component, Identifiers, Product};
pub use document::{Document, DEFAULT_CONTEXT, DEFAULT_TOOLING};
pub use hashes::{HashAlgorithm, Hashes};
pub use iri::Iri;
pub use purl::PackageUrl;
pub use statement::{Justification, Statement, Status};
pub use timestamp::Timestamp;
pub use vulnerability::Vulnerability;
