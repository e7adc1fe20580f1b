//! Package URL (purl) identifiers.
//!
//! Parsing and canonical formatting are delegated to the `packageurl` crate;
//! this wrapper pins the canonical string so it can serve as the value's
//! identity.

use crate::shared::error::VexError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A parsed package URL.
///
/// Equality and hashing follow the canonical form, so two spellings of the
/// same package compare equal.
#[derive(Debug, Clone)]
pub struct PackageUrl {
    inner: packageurl::PackageUrl<'static>,
    canonical: String,
}

impl PackageUrl {
    /// Parse and normalise a purl string.
    pub fn parse(purl: &str) -> Result<Self, VexError> {
        let inner = purl
            .parse::<packageurl::PackageUrl<'static>>()
            .map_err(|e| VexError::MalformedPackageUrl {
                purl: purl.to_string(),
                reason: e.to_string(),
            })?;
        let canonical = inner.to_string();
        Ok(Self { inner, canonical })
    }

    pub fn pkg_type(&self) -> &str {
        self.inner.ty()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.inner.namespace()
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn version(&self) -> Option<&str> {
        self.inner.version()
    }

    pub fn subpath(&self) -> Option<&str> {
        self.inner.subpath()
    }

    /// The canonical string form, percent-encoded.
    pub fn canonicalize(&self) -> &str {
        &self.canonical
    }
}

impl PartialEq for PackageUrl {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for PackageUrl {}

impl Hash for PackageUrl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl FromStr for PackageUrl {
    type Err = VexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for PackageUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.canonical)
    }
}

impl<'de> Deserialize<'de> for PackageUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
