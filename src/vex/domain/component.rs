use super::hashes::Hashes;
use super::iri::Iri;
use super::purl::PackageUrl;
use serde::{Deserialize, Serialize};

/// Software identifiers of a component. Only purl is supported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifiers {
    purl: PackageUrl,
}

impl Identifiers {
    pub fn new(purl: PackageUrl) -> Self {
        Self { purl }
    }

    pub fn purl(&self) -> &PackageUrl {
        &self.purl
    }
}

/// A piece of software identified by IRI.
///
/// Equality covers the id, identifiers and hashes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "@id")]
    id: Iri,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifiers: Option<Identifiers>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    hashes: Option<Hashes>,
}

impl Component {
    pub fn new(id: Iri) -> Self {
        Self {
            id,
            identifiers: None,
            hashes: None,
        }
    }

    pub fn with_identifiers(mut self, identifiers: Identifiers) -> Self {
        self.identifiers = Some(identifiers);
        self
    }

    pub fn with_hashes(mut self, hashes: Hashes) -> Self {
        self.hashes = Some(hashes);
        self
    }

    pub fn id(&self) -> &Iri {
        &self.id
    }

    pub fn identifiers(&self) -> Option<&Identifiers> {
        self.identifiers.as_ref()
    }

    pub fn hashes(&self) -> Option<&Hashes> {
        self.hashes.as_ref()
    }

    pub fn set_identifiers(&mut self, identifiers: Option<Identifiers>) {
        self.identifiers = identifiers;
    }

    pub fn set_hashes(&mut self, hashes: Option<Hashes>) {
        self.hashes = hashes;
    }
}

/// A component that a statement applies to, with optional nested subcomponents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    component: Component,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    subcomponents: Vec<Component>,
}

impl Product {
    pub fn new(id: Iri) -> Self {
        Self::from_component(Component::new(id))
    }

    pub fn from_component(component: Component) -> Self {
        Self {
            component,
            subcomponents: Vec::new(),
        }
    }

    pub fn with_identifiers(mut self, identifiers: Identifiers) -> Self {
        self.component.identifiers = Some(identifiers);
        self
    }

    pub fn with_hashes(mut self, hashes: Hashes) -> Self {
        self.component.hashes = Some(hashes);
        self
    }

    pub fn with_subcomponent(mut self, subcomponent: Component) -> Self {
        self.subcomponents.push(subcomponent);
        self
    }

    pub fn add_subcomponent(&mut self, subcomponent: Component) {
        self.subcomponents.push(subcomponent);
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut Component {
        &mut self.component
    }

    pub fn id(&self) -> &Iri {
        self.component.id()
    }

    pub fn identifiers(&self) -> Option<&Identifiers> {
        self.component.identifiers()
    }

    pub fn hashes(&self) -> Option<&Hashes> {
        self.component.hashes()
    }

    pub fn subcomponents(&self) -> &[Component] {
        &self.subcomponents
    }
}
