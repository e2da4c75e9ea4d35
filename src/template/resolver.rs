//! Resolution of raw selector tokens to a template descriptor

use crate::error::{ResolutionError, ResolutionFailure};
use crate::vocabulary::{DocumentCategory, RecordCategory};

use super::registry::{TemplateDescriptor, TemplateRegistry};

/// Resolve two raw selector tokens to the unique matching descriptor
///
/// The document token is parsed first; if it names no [`DocumentCategory`]
/// the record token is never inspected. Parse failures and unsupported
/// combinations both surface with the canonical message — the precise cause
/// stays on [`ResolutionError::failure`] for diagnostics.
///
/// Resolution is a pure function of the fixed registry and the two tokens:
/// no I/O, no locking, no observable effect on other calls.
///
/// # Example
///
/// ```rust
/// use document_templates::resolve_template;
///
/// let descriptor = resolve_template("GLPP", "INDIVIDUAL_PROSPECT").unwrap();
/// assert_eq!(descriptor.template_id, "GUIDEPP");
/// assert_eq!(descriptor.template_file, "GLPP.ftl");
/// ```
pub fn resolve_template(
    document_token: &str,
    record_token: &str,
) -> Result<&'static TemplateDescriptor, ResolutionError> {
    let document: DocumentCategory = document_token.parse()?;
    let record: RecordCategory = record_token.parse()?;

    TemplateRegistry::standard()
        .find(document, record)
        .ok_or_else(|| {
            ResolutionError::new(ResolutionFailure::NoTemplateForCombination { document, record })
        })
}
