use super::iri::Iri;
use crate::shared::error::VexError;
use serde::{Deserialize, Serialize};

/// The vulnerability a statement is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vulnerability {
    /// Identifying string such as a CVE id.
    name: String,

    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    id: Option<Iri>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    /// Alternate names, kept in the order given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    aliases: Option<Vec<String>>,
}

impl Vulnerability {
    pub fn new(name: impl Into<String>) -> Result<Self, VexError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(VexError::MissingRequired {
                field: "vulnerability.name",
            });
        }
        Ok(Self {
            name,
            id: None,
            description: None,
            aliases: None,
        })
    }

    pub fn with_id(mut self, id: Iri) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = Some(aliases.into_iter().map(Into::into).collect());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> Option<&Iri> {
        self.id.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn aliases(&self) -> Option<&[String]> {
        self.aliases.as_deref()
    }
}
