use super::component::Product;
use super::iri::Iri;
use super::timestamp::{self, Timestamp};
use super::vulnerability::Vulnerability;
use crate::shared::error::VexError;
use serde::{Deserialize, Serialize};

/// Impact of a vulnerability on the products of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    NotAffected,
    Affected,
    Fixed,
    UnderInvestigation,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotAffected => "not_affected",
            Status::Affected => "affected",
            Status::Fixed => "fixed",
            Status::UnderInvestigation => "under_investigation",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a product is not affected by a vulnerability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justification {
    ComponentNotPresent,
    VulnerableCodeNotPresent,
    VulnerableCodeNotInExecutePath,
    VulnerableCodeCannotBeControlledByAdversary,
    InlineMitigationsAlreadyExist,
}

impl Justification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Justification::ComponentNotPresent => "component_not_present",
            Justification::VulnerableCodeNotPresent => "vulnerable_code_not_present",
            Justification::VulnerableCodeNotInExecutePath => "vulnerable_code_not_in_execute_path",
            Justification::VulnerableCodeCannotBeControlledByAdversary => {
                "vulnerable_code_cannot_be_controlled_by_adversary"
            }
            Justification::InlineMitigationsAlreadyExist => "inline_mitigations_already_exist",
        }
    }
}

impl std::fmt::Display for Justification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An assertion about the impact of one vulnerability on one or more products.
///
/// The vulnerability, products and status are fixed at construction. Status
/// dependent fields are checked when read: see [`Statement::justification`]
/// and [`Statement::action_statement`].
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    vulnerability: Vulnerability,
    products: Vec<Product>,
    status: Status,
    id: Option<Iri>,
    version: Option<u32>,
    timestamp: Option<Timestamp>,
    last_updated: Option<Timestamp>,
    supplier: Option<String>,
    status_notes: Option<String>,
    justification: Option<Justification>,
    impact_statement: Option<String>,
    action_statement: Option<String>,
    action_statement_timestamp: Option<Timestamp>,
}

impl Statement {
    /// Creates a statement. At least one product is required.
    pub fn new(
        vulnerability: Vulnerability,
        products: Vec<Product>,
        status: Status,
    ) -> Result<Self, VexError> {
        if products.is_empty() {
            return Err(VexError::EmptyProducts {
                vulnerability: vulnerability.name().to_string(),
            });
        }
        Ok(Self {
            vulnerability,
            products,
            status,
            id: None,
            version: None,
            timestamp: None,
            last_updated: None,
            supplier: None,
            status_notes: None,
            justification: None,
            impact_statement: None,
            action_statement: None,
            action_statement_timestamp: None,
        })
    }

    pub fn vulnerability(&self) -> &Vulnerability {
        &self.vulnerability
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn id(&self) -> Option<&Iri> {
        self.id.as_ref()
    }

    pub fn version(&self) -> Option<u32> {
        self.version
    }

    pub fn timestamp(&self) -> Option<&Timestamp> {
        self.timestamp.as_ref()
    }

    pub fn last_updated(&self) -> Option<&Timestamp> {
        self.last_updated.as_ref()
    }

    pub fn supplier(&self) -> Option<&str> {
        self.supplier.as_deref()
    }

    pub fn status_notes(&self) -> Option<&str> {
        self.status_notes.as_deref()
    }

    /// Justification of a `not_affected` statement.
    ///
    /// # Errors
    /// Fails when the status is `not_affected` and neither a justification nor
    /// an impact statement has been set.
    pub fn justification(&self) -> Result<Option<Justification>, VexError> {
        if self.status == Status::NotAffected
            && self.justification.is_none()
            && self.impact_statement.is_none()
        {
            return Err(VexError::MissingJustification {
                vulnerability: self.vulnerability.name().to_string(),
            });
        }
        Ok(self.justification)
    }

    pub fn impact_statement(&self) -> Option<&str> {
        self.impact_statement.as_deref()
    }

    /// Remediation guidance of an `affected` statement.
    ///
    /// # Errors
    /// Fails when the status is `affected` and no action statement has been set.
    pub fn action_statement(&self) -> Result<Option<&str>, VexError> {
        if self.status == Status::Affected && self.action_statement.is_none() {
            return Err(VexError::MissingActionStatement {
                vulnerability: self.vulnerability.name().to_string(),
            });
        }
        Ok(self.action_statement.as_deref())
    }

    pub fn action_statement_timestamp(&self) -> Option<&Timestamp> {
        self.action_statement_timestamp.as_ref()
    }

    pub fn set_id(&mut self, id: Option<Iri>) {
        self.id = id;
    }

    pub fn set_version(&mut self, version: Option<u32>) {
        self.version = version;
    }

    pub fn set_timestamp(&mut self, timestamp: Option<Timestamp>) {
        self.timestamp = timestamp;
    }

    pub fn set_last_updated(&mut self, last_updated: Option<Timestamp>) {
        self.last_updated = last_updated;
    }

    pub fn set_supplier(&mut self, supplier: Option<String>) {
        self.supplier = supplier;
    }

    pub fn set_status_notes(&mut self, status_notes: Option<String>) {
        self.status_notes = status_notes;
    }

    pub fn set_justification(&mut self, justification: Option<Justification>) {
        self.justification = justification;
    }

    pub fn set_impact_statement(&mut self, impact_statement: Option<String>) {
        self.impact_statement = impact_statement;
    }

    /// Sets the action statement and stamps `action_statement_timestamp` with now.
    pub fn set_action_statement(&mut self, action_statement: impl Into<String>) {
        self.action_statement = Some(action_statement.into());
        self.action_statement_timestamp = Some(timestamp::now());
    }

    /// Restores both action fields exactly as they were recorded externally.
    pub(crate) fn restore_action_statement(
        &mut self,
        action_statement: Option<String>,
        action_statement_timestamp: Option<Timestamp>,
    ) {
        self.action_statement = action_statement;
        self.action_statement_timestamp = action_statement_timestamp;
    }

    /// Raw justification, without the status check.
    pub(crate) fn justification_unchecked(&self) -> Option<Justification> {
        self.justification
    }

    pub(crate) fn action_statement_unchecked(&self) -> Option<&str> {
        self.action_statement.as_deref()
    }
}
