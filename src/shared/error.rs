use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every document was identified and emitted
    Success = 0,
    /// A document violated a VEX invariant (missing justification, no statements, ...)
    ValidationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (malformed JSON, file I/O error, bad config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error surfaced by the application.
    ///
    /// Errors that carry a [`VexError`] of the illegal-state class are
    /// reported as validation failures; everything else is an application error.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<VexError>().map(VexError::kind) {
            Some(ErrorKind::IllegalState) => ExitCode::ValidationFailed,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ValidationFailed => write!(f, "Validation Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Broad class of a [`VexError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value handed to a constructor was missing or unusable.
    InvalidArgument,
    /// An operation was attempted on a document or statement in the wrong state.
    IllegalState,
    /// External input (JSON, timestamps, package URLs) could not be understood.
    Format,
    /// Reading or writing files failed.
    Io,
}

/// Errors raised by the VEX model, codec and filesystem adapters.
#[derive(Debug, Error)]
pub enum VexError {
    #[error("Missing required value: {field} must be present and non-empty")]
    MissingRequired { field: &'static str },

    #[error("Invalid IRI '{value}': {reason}")]
    InvalidIri { value: String, reason: String },

    #[error("Statement for {vulnerability} must list at least one product")]
    EmptyProducts { vulnerability: String },

    #[error("Cannot set author role on a document loaded from external data")]
    RoleLocked,

    #[error("Statement for {vulnerability} has status not_affected but neither a justification nor an impact_statement\n\n💡 Hint: For statements conveying a not_affected status, a VEX statement MUST include either a status justification or an impact_statement")]
    MissingJustification { vulnerability: String },

    #[error("Statement for {vulnerability} has status affected but no action_statement\n\n💡 Hint: For a statement with \"affected\" status, a VEX statement MUST include a statement that SHOULD describe actions to remediate or mitigate the vulnerability")]
    MissingActionStatement { vulnerability: String },

    #[error("Document has no statements\n\n💡 Hint: A VEX document must carry at least one statement before it can be serialized")]
    NoStatements,

    #[error("Cannot bulk-add statements to a document that already has statements\n\n💡 Hint: Append statements one at a time so existing statements inherit the document timestamp")]
    BulkAppendRejected,

    #[error("Malformed VEX document: {details}")]
    MalformedDocument { details: String },

    #[error("Invalid timestamp in {field}: '{value}'\nDetails: {details}")]
    InvalidTimestamp {
        field: &'static str,
        value: String,
        details: String,
    },

    #[error("Malformed package URL '{purl}': {reason}")]
    MalformedPackageUrl { purl: String, reason: String },

    /// Validation error for configuration and request options
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl VexError {
    /// Returns the error class this variant belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            VexError::MissingRequired { .. }
            | VexError::InvalidIri { .. }
            | VexError::EmptyProducts { .. }
            | VexError::Validation { .. } => ErrorKind::InvalidArgument,
            VexError::RoleLocked
            | VexError::MissingJustification { .. }
            | VexError::MissingActionStatement { .. }
            | VexError::NoStatements
            | VexError::BulkAppendRejected => ErrorKind::IllegalState,
            VexError::MalformedDocument { .. }
            | VexError::InvalidTimestamp { .. }
            | VexError::MalformedPackageUrl { .. } => ErrorKind::Format,
            VexError::FileReadError { .. }
            | VexError::FileWriteError { .. }
            | VexError::SecurityError { .. } => ErrorKind::Io,
        }
    }
}
