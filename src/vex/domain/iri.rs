use crate::shared::error::VexError;
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum length for an IRI (security limit)
const MAX_IRI_LENGTH: usize = 4096;

/// NewType wrapper for an IRI with validation
///
/// The string is kept exactly as given: canonical hashing relies on the
/// author's spelling, so nothing is normalised here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    /// Parses an absolute IRI (`scheme:rest`).
    pub fn parse(value: impl Into<String>) -> Result<Self, VexError> {
        let value = value.into();

        if value.is_empty() {
            return Err(VexError::InvalidIri {
                value,
                reason: "IRI cannot be empty".to_string(),
            });
        }

        if value.len() > MAX_IRI_LENGTH {
            return Err(VexError::InvalidIri {
                reason: format!(
                    "IRI is too long ({} bytes). Maximum allowed: {} bytes",
                    value.len(),
                    MAX_IRI_LENGTH
                ),
                value,
            });
        }

        if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(VexError::InvalidIri {
                value,
                reason: "IRI contains whitespace or control characters".to_string(),
            });
        }

        let scheme = match value.split_once(':') {
            Some((scheme, _)) => scheme,
            None => {
                return Err(VexError::InvalidIri {
                    value,
                    reason: "IRI has no scheme".to_string(),
                })
            }
        };

        // RFC 3986: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
        let valid_scheme = scheme
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.');
        if !valid_scheme {
            return Err(VexError::InvalidIri {
                reason: format!("'{}' is not a valid scheme", scheme),
                value,
            });
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Iri {
    type Err = VexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Iri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Iri::parse(value).map_err(serde::de::Error::custom)
    }
}
