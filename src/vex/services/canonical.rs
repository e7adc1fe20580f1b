use crate::shared::error::VexError;
use crate::vex::domain::{Component, Document, Product, Statement, Timestamp};
use sha2::{Digest, Sha256};
use std::cmp::Ordering;

/// Builds the canonical representation of a document and its hash.
///
/// The representation covers author, timestamp, version and the semantic
/// content of every statement. `@id`, role, last_updated and tooling are not
/// part of it. The output is interoperable with go-vex's canonical hash.
pub struct CanonicalRepresentationBuilder;

impl CanonicalRepresentationBuilder {
    /// Flattens `document` into its canonical string.
    ///
    /// A statement without a justification contributes an empty field
    /// (`fixed::<epoch>`), never the literal `null`. Documents hashed by
    /// tools that print `null` there get different ids.
    ///
    /// # Errors
    /// Fails if a `not_affected` statement has neither a justification nor an
    /// impact statement.
    pub fn build(document: &Document) -> Result<String, VexError> {
        let doc_epoch = document.timestamp().timestamp();

        let mut out = format!(
            "{}:{}:{}",
            doc_epoch,
            document.version(),
            document.author()
        );

        for (statement, effective) in Self::sorted_statements(document) {
            Self::append_statement(&mut out, statement, effective.timestamp())?;
        }

        Ok(out)
    }

    /// SHA-256 of the canonical representation, lower-case hex.
    pub fn hash(document: &Document) -> Result<String, VexError> {
        let representation = Self::build(document)?;
        Ok(Self::digest(&representation))
    }

    pub(crate) fn digest(representation: &str) -> String {
        hex::encode(Sha256::digest(representation.as_bytes()))
    }

    /// Statements ordered by vulnerability name, then by effective timestamp.
    ///
    /// A statement without a timestamp takes the document's. The sort is
    /// stable and leaves the document untouched.
    fn sorted_statements(document: &Document) -> Vec<(&Statement, Timestamp)> {
        let mut working: Vec<(&Statement, Timestamp)> = document
            .statements()
            .iter()
            .map(|s| (s, s.timestamp().copied().unwrap_or(*document.timestamp())))
            .collect();

        working.sort_by(|(a, a_ts), (b, b_ts)| {
            match a.vulnerability().name().cmp(b.vulnerability().name()) {
                Ordering::Equal => a_ts.cmp(b_ts),
                other => other,
            }
        });

        working
    }

    fn append_statement(
        out: &mut String,
        statement: &Statement,
        effective_epoch: i64,
    ) -> Result<(), VexError> {
        let vulnerability = statement.vulnerability();
        if let Some(id) = vulnerability.id() {
            out.push(':');
            out.push_str(id.as_str());
        }
        out.push(':');
        out.push_str(vulnerability.name());
        if let Some(aliases) = vulnerability.aliases() {
            out.push(':');
            out.push_str(&aliases.join(":"));
        }

        let justification = statement
            .justification()?
            .map(|j| j.as_str())
            .unwrap_or_default();
        out.push_str(&format!(
            ":{}:{}:{}",
            statement.status(),
            justification,
            effective_epoch
        ));

        let mut products: Vec<String> = statement.products().iter().map(product_string).collect();
        products.sort();
        out.push_str(&products.join(":"));

        Ok(())
    }
}

fn product_string(product: &Product) -> String {
    let mut out = component_string(product.component());
    for subcomponent in product.subcomponents() {
        out.push_str(&component_string(subcomponent));
    }
    out
}

fn component_string(component: &Component) -> String {
    let mut out = format!(":{}", component.id());

    if let Some(hashes) = component.hashes() {
        for (algorithm, digest) in hashes.iter() {
            out.push_str(&format!(":{}@{}", algorithm, digest));
        }
    }

    if let Some(identifiers) = component.identifiers() {
        let purl = identifiers.purl().canonicalize().replace("%3A", ":");
        out.push_str(&format!(":purl@{}", purl));
    }

    out
}
