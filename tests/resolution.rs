//! Integration tests for the public resolution contract

use pretty_assertions::assert_eq;

use document_templates::{
    resolve_template, DocumentCategory, ParseError, RecordCategory, ResolutionFailure,
    TemplateRegistry, Vocabulary,
};

const CANONICAL_MESSAGE: &str = "Invalid Document template type or record type";

#[test]
fn test_glpp_and_individual_prospect_returns_glpp_template() {
    let descriptor = resolve_template("GLPP", "INDIVIDUAL_PROSPECT").expect("Should resolve");

    assert_eq!(descriptor.document, DocumentCategory::Glpp);
    assert_eq!(descriptor.record, RecordCategory::IndividualProspect);
    assert_eq!(descriptor.template_id, "GUIDEPP");
    assert_eq!(descriptor.template_file, "GLPP.ftl");
}

#[test]
fn test_glpp_and_legal_prospect_fails_with_canonical_message() {
    let error = resolve_template("GLPP", "LEGAL_PROSPECT").expect_err("Should fail");

    assert_eq!(error.to_string(), CANONICAL_MESSAGE);
    assert!(matches!(
        error.failure(),
        ResolutionFailure::NoTemplateForCombination { .. }
    ));
}

#[test]
fn test_unknown_token_fails_with_the_same_canonical_message() {
    // The caller cannot tell a bad token from an unsupported combination
    let error = resolve_template("NOT_A_TYPE", "INDIVIDUAL_PROSPECT").expect_err("Should fail");

    assert_eq!(error.to_string(), CANONICAL_MESSAGE);
    assert!(matches!(
        error.failure(),
        ResolutionFailure::InvalidSelector(ParseError::UnknownToken {
            vocabulary: Vocabulary::DocumentCategory,
            ..
        })
    ));
}

#[test]
fn test_every_registry_entry_round_trips() {
    for entry in TemplateRegistry::standard().entries() {
        let resolved = resolve_template(entry.document.as_str(), entry.record.as_str())
            .expect("Registered pair should resolve");
        assert_eq!(resolved, entry);
    }
}

#[test]
fn test_identical_inputs_yield_identical_results() {
    assert_eq!(
        resolve_template("ID_CARD", "INDIVIDUAL_CLIENT"),
        resolve_template("ID_CARD", "INDIVIDUAL_CLIENT")
    );
    assert_eq!(
        resolve_template("ID_CARD", "LEGAL_CLIENT"),
        resolve_template("ID_CARD", "LEGAL_CLIENT")
    );
}

#[test]
fn test_tokens_must_match_canonical_spelling_exactly() {
    assert!(resolve_template("glpp", "INDIVIDUAL_PROSPECT").is_err());
    assert!(resolve_template("GLPP", "individual_prospect").is_err());
    assert!(resolve_template(" GLPP", "INDIVIDUAL_PROSPECT").is_err());
}
