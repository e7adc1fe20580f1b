/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod identify_request;
mod identify_response;
mod output_format;

pub use identify_request::IdentifyRequest;
pub use identify_response::{IdentifiedDocument, IdentifyResponse};
pub use output_format::OutputFormat;
