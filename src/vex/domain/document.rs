use super::iri::Iri;
use super::statement::Statement;
use super::timestamp::{self, Timestamp};
use crate::shared::error::VexError;
use crate::vex::services::{CanonicalDocumentIdGenerator, DocumentIdGenerator};

/// Context IRI of OpenVEX v0.2.0 documents.
pub const DEFAULT_CONTEXT: &str = "https://openvex.dev/ns/v0.2.0";

/// Tooling recorded on freshly authored documents.
pub const DEFAULT_TOOLING: &str = concat!("vexid/", env!("CARGO_PKG_VERSION"));

/// A VEX document: authorship metadata plus a list of statements.
///
/// Documents are either authored in code ([`Document::new`],
/// [`Document::authored_by`]) or restored from an external representation by
/// the JSON codec. Restored documents refuse [`Document::set_role`].
#[derive(Debug, Clone)]
pub struct Document {
    context: Iri,
    id: Option<Iri>,
    author: String,
    timestamp: Timestamp,
    version: u32,
    role: Option<String>,
    last_updated: Option<Timestamp>,
    tooling: Option<String>,
    statements: Vec<Statement>,
    deserialized: bool,
}

impl Document {
    /// Starts a new document with timestamp now, version 1 and default tooling.
    ///
    /// # Errors
    /// Fails if `author` is blank.
    pub fn new(context: Iri, id: Option<Iri>, author: impl Into<String>) -> Result<Self, VexError> {
        let author = author.into();
        if author.trim().is_empty() {
            return Err(VexError::MissingRequired { field: "author" });
        }
        Ok(Self {
            context,
            id,
            author,
            timestamp: timestamp::now(),
            version: 1,
            role: None,
            last_updated: None,
            tooling: Some(DEFAULT_TOOLING.to_string()),
            statements: Vec::new(),
            deserialized: false,
        })
    }

    /// Starts a new OpenVEX v0.2.0 document without an id.
    pub fn authored_by(author: impl Into<String>) -> Result<Self, VexError> {
        Self::new(Iri::parse(DEFAULT_CONTEXT)?, None, author)
    }

    /// Rebuilds a document from externally recorded fields.
    pub(crate) fn restore(
        context: Iri,
        id: Option<Iri>,
        author: String,
        timestamp: Timestamp,
        version: u32,
    ) -> Result<Self, VexError> {
        if author.trim().is_empty() {
            return Err(VexError::MissingRequired { field: "author" });
        }
        if version == 0 {
            return Err(VexError::MalformedDocument {
                details: "version must be a positive integer".to_string(),
            });
        }
        Ok(Self {
            context,
            id,
            author,
            timestamp,
            version,
            role: None,
            last_updated: None,
            tooling: None,
            statements: Vec::new(),
            deserialized: true,
        })
    }

    pub fn context(&self) -> &Iri {
        &self.context
    }

    pub fn id(&self) -> Option<&Iri> {
        self.id.as_ref()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn last_updated(&self) -> Option<&Timestamp> {
        self.last_updated.as_ref()
    }

    pub fn tooling(&self) -> Option<&str> {
        self.tooling.as_deref()
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Mutable access to existing statements. Use [`Document::add_statement`] to append.
    pub fn statements_mut(&mut self) -> &mut [Statement] {
        &mut self.statements
    }

    pub fn is_deserialized(&self) -> bool {
        self.deserialized
    }

    pub fn set_id(&mut self, id: Option<Iri>) {
        self.id = id;
    }

    pub fn increment_version(&mut self) {
        self.version = self.version.saturating_add(1);
    }

    /// Sets the author's role.
    ///
    /// # Errors
    /// Returns [`VexError::RoleLocked`] for documents restored from external data.
    pub fn set_role(&mut self, role: impl Into<String>) -> Result<(), VexError> {
        if self.deserialized {
            return Err(VexError::RoleLocked);
        }
        self.role = Some(role.into());
        Ok(())
    }

    pub(crate) fn restore_role(&mut self, role: Option<String>) {
        self.role = role;
    }

    pub fn set_tooling(&mut self, tooling: Option<String>) {
        self.tooling = tooling;
    }

    pub fn set_last_updated(&mut self, last_updated: Option<Timestamp>) {
        self.last_updated = last_updated;
    }

    pub fn set_timestamp(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Appends a statement.
    ///
    /// Existing statements without a timestamp first inherit the current
    /// document timestamp, then the document timestamp moves to now.
    pub fn add_statement(&mut self, statement: Statement) {
        let inherited = self.timestamp;
        for existing in self.statements.iter_mut() {
            if existing.timestamp().is_none() {
                existing.set_timestamp(Some(inherited));
            }
        }
        self.timestamp = timestamp::now();
        self.statements.push(statement);
    }

    /// Replaces the statement list wholesale. No timestamps are inherited.
    pub fn set_statements(&mut self, statements: Vec<Statement>) {
        self.statements = statements;
    }

    /// Bulk-adds statements to a document that has none yet.
    ///
    /// # Errors
    /// Returns [`VexError::BulkAppendRejected`] if the document already has
    /// statements, since they would skip timestamp inheritance.
    pub fn extend_statements<I>(&mut self, statements: I) -> Result<(), VexError>
    where
        I: IntoIterator<Item = Statement>,
    {
        if !self.statements.is_empty() {
            return Err(VexError::BulkAppendRejected);
        }
        self.statements.extend(statements);
        Ok(())
    }

    /// Generates an id with `generator` and stores it on the document.
    pub fn generate_id(&mut self, generator: &dyn DocumentIdGenerator) -> Result<&Iri, VexError> {
        let id = generator.generate(self)?;
        Ok(self.id.insert(id))
    }

    /// Stores the canonical content-hash id on the document.
    pub fn generate_canonical_id(&mut self) -> Result<&Iri, VexError> {
        self.generate_id(&CanonicalDocumentIdGenerator)
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.context == other.context
            && self.id == other.id
            && self.author == other.author
            && self.timestamp == other.timestamp
            && self.version == other.version
            && self.role == other.role
            && self.last_updated == other.last_updated
            && self.tooling == other.tooling
            && self.statements == other.statements
    }
}
