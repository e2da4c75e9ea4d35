//! Document Templates - template resolution for document generation
//!
//! This library resolves a document category token and a record category
//! token — both raw strings supplied by an external system — to exactly one
//! template descriptor, or fails with a precise, typed reason. The supported
//! combinations live in a fixed, immutable registry; pairs absent from it
//! are unsupported by design.
//!
//! # Example
//!
//! ```rust
//! use document_templates::resolve_template;
//!
//! let descriptor = resolve_template("GLPP", "INDIVIDUAL_PROSPECT").unwrap();
//! assert_eq!(descriptor.template_id, "GUIDEPP");
//! assert_eq!(descriptor.template_file, "GLPP.ftl");
//! ```
//!
//! Every failure — unknown token or valid tokens with no rule for the
//! combination — surfaces to the caller with the identical canonical
//! message, so the external contract does not leak vocabulary evolution:
//!
//! ```rust
//! use document_templates::resolve_template;
//!
//! let error = resolve_template("GLPP", "LEGAL_PROSPECT").unwrap_err();
//! assert_eq!(error.to_string(), "Invalid Document template type or record type");
//! ```

pub mod error;
pub mod report;
pub mod template;
pub mod vocabulary;

pub use error::{ParseError, ResolutionError, ResolutionFailure, Vocabulary};
pub use report::combination_report;
pub use template::{resolve_template, TemplateDescriptor, TemplateRegistry};
pub use vocabulary::{DocumentCategory, RecordCategory};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_combination() {
        let descriptor = resolve_template("GLPP", "INDIVIDUAL_PROSPECT").unwrap();
        assert_eq!(descriptor.template_id, "GUIDEPP");
    }

    #[test]
    fn test_resolve_failure_uses_canonical_message() {
        let error = resolve_template("GLPP", "LEGAL_PROSPECT").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid Document template type or record type"
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let first = resolve_template("GLPM", "LEGAL_PROSPECT");
        let second = resolve_template("GLPM", "LEGAL_PROSPECT");
        assert_eq!(first, second);

        let first = resolve_template("GLPM", "NOT_A_TYPE");
        let second = resolve_template("GLPM", "NOT_A_TYPE");
        assert_eq!(first, second);
    }
}
