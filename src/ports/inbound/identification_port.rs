use crate::application::dto::{IdentifyRequest, IdentifyResponse};
use crate::shared::Result;

/// DocumentIdentificationPort - Inbound port for assigning canonical ids
///
/// This is what the CLI drives: load a batch of VEX documents, apply the
/// requested edits and hand back validated documents carrying an `@id`.
pub trait DocumentIdentificationPort {
    /// Identifies every document named in `request`
    ///
    /// Processing stops at the first failing document; no partial response
    /// is returned.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A document cannot be read or parsed
    /// - A document fails validation (no statements, missing justification
    ///   or action statement)
    fn identify(&self, request: IdentifyRequest) -> Result<IdentifyResponse>;
}
