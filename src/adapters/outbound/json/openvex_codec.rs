use crate::shared::error::VexError;
use crate::vex::domain::timestamp;
use crate::vex::domain::{Document, Iri, Justification, Product, Statement, Status, Vulnerability};
use crate::vex::services::{DocumentIdGenerator, DocumentValidator};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct WireDocument {
    #[serde(rename = "@context")]
    context: Iri,
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    id: Option<Iri>,
    author: String,
    timestamp: String,
    version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tooling: Option<String>,
    statements: Vec<WireStatement>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireStatement {
    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    id: Option<Iri>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<u32>,
    vulnerability: Vulnerability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_updated: Option<String>,
    products: Vec<Product>,
    status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    supplier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    justification: Option<Justification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    impact_statement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action_statement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action_statement_timestamp: Option<String>,
}

fn parse_optional(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<timestamp::Timestamp>, VexError> {
    value.map(|v| timestamp::parse(field, v)).transpose()
}

impl WireDocument {
    fn into_document(self) -> Result<Document, VexError> {
        if self.statements.is_empty() {
            return Err(VexError::MalformedDocument {
                details: "statements must contain at least one statement".to_string(),
            });
        }

        let issued = timestamp::parse("timestamp", &self.timestamp)?;
        let mut document =
            Document::restore(self.context, self.id, self.author, issued, self.version)?;
        document.restore_role(self.role);
        document.set_tooling(self.tooling);
        document.set_last_updated(parse_optional("last_updated", self.last_updated.as_deref())?);

        let statements = self
            .statements
            .into_iter()
            .map(WireStatement::into_statement)
            .collect::<Result<Vec<_>, _>>()?;
        document.set_statements(statements);

        Ok(document)
    }

    fn from_document(document: &Document) -> Self {
        Self {
            context: document.context().clone(),
            id: document.id().cloned(),
            author: document.author().to_string(),
            timestamp: timestamp::format(document.timestamp()),
            version: document.version(),
            role: document.role().map(str::to_string),
            last_updated: document.last_updated().map(timestamp::format),
            tooling: document.tooling().map(str::to_string),
            statements: document
                .statements()
                .iter()
                .map(WireStatement::from_statement)
                .collect(),
        }
    }
}

impl WireStatement {
    fn into_statement(self) -> Result<Statement, VexError> {
        let mut statement = Statement::new(self.vulnerability, self.products, self.status)
            .map_err(|e| VexError::MalformedDocument {
                details: e.to_string(),
            })?;

        statement.set_id(self.id);
        statement.set_version(self.version);
        statement.set_timestamp(parse_optional("statement.timestamp", self.timestamp.as_deref())?);
        statement.set_last_updated(parse_optional(
            "statement.last_updated",
            self.last_updated.as_deref(),
        )?);
        statement.set_supplier(self.supplier);
        statement.set_status_notes(self.status_notes);
        statement.set_justification(self.justification);
        statement.set_impact_statement(self.impact_statement);
        statement.restore_action_statement(
            self.action_statement,
            parse_optional(
                "statement.action_statement_timestamp",
                self.action_statement_timestamp.as_deref(),
            )?,
        );

        Ok(statement)
    }

    fn from_statement(statement: &Statement) -> Self {
        Self {
            id: statement.id().cloned(),
            version: statement.version(),
            vulnerability: statement.vulnerability().clone(),
            timestamp: statement.timestamp().map(timestamp::format),
            last_updated: statement.last_updated().map(timestamp::format),
            products: statement.products().to_vec(),
            status: statement.status(),
            supplier: statement.supplier().map(str::to_string),
            status_notes: statement.status_notes().map(str::to_string),
            justification: statement.justification_unchecked(),
            impact_statement: statement.impact_statement().map(str::to_string),
            action_statement: statement.action_statement_unchecked().map(str::to_string),
            action_statement_timestamp: statement.action_statement_timestamp().map(timestamp::format),
        }
    }
}

/// Parses an OpenVEX JSON document.
///
/// The result is marked as restored from external data, so its role can no
/// longer be changed.
///
/// # Errors
/// Returns a format error for malformed JSON, missing required fields, an
/// empty statement list, unparsable timestamps or malformed package URLs.
pub fn parse_document(json: &str) -> Result<Document, VexError> {
    let wire: WireDocument =
        serde_json::from_str(json).map_err(|e| VexError::MalformedDocument {
            details: e.to_string(),
        })?;
    wire.into_document()
}

/// Serializes a document that already carries an `@id`.
///
/// # Errors
/// Propagates errors from [`DocumentValidator`], and fails with
/// [`VexError::MissingRequired`] when `@id` is absent.
pub fn to_json_string(document: &Document) -> Result<String, VexError> {
    DocumentValidator::validate(document)?;
    if document.id().is_none() {
        return Err(VexError::MissingRequired { field: "@id" });
    }
    serde_json::to_string_pretty(&WireDocument::from_document(document)).map_err(|e| {
        VexError::MalformedDocument {
            details: e.to_string(),
        }
    })
}

/// Validates and serializes `document`, generating its `@id` first if absent.
///
/// The generated id is stored on the document.
pub fn to_json(
    document: &mut Document,
    generator: &dyn DocumentIdGenerator,
) -> Result<String, VexError> {
    DocumentValidator::validate(document)?;
    if document.id().is_none() {
        document.generate_id(generator)?;
    }
    to_json_string(document)
}
