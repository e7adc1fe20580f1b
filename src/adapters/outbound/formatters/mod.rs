/// Formatter adapters for the supported output formats
mod canonical_formatter;
mod id_formatter;
mod json_formatter;

pub use canonical_formatter::CanonicalFormatter;
pub use id_formatter::IdFormatter;
pub use json_formatter::JsonFormatter;
