//! Exhaustive combination report over both vocabularies
//!
//! Diagnostic and regression utility, not a production path. The full report
//! text is pinned by a committed snapshot, so a registry change that flips
//! which combinations resolve shows up as a diff.

use crate::template::resolve_template;
use crate::vocabulary::{DocumentCategory, RecordCategory};

/// Attempt resolution for every (document, record) pair and report one line
/// per pair
///
/// The outer loop runs over [`DocumentCategory::ALL`] and the inner loop over
/// [`RecordCategory::ALL`], both in declaration order, so the report is
/// stable across runs. Each line is either the descriptor's textual form or
/// the canonical failure message:
///
/// ```text
/// [GLPP,INDIVIDUAL_PROSPECT] => GUIDEPP (GLPP.ftl)
/// [GLPP,LEGAL_PROSPECT] => Invalid Document template type or record type
/// ```
pub fn combination_report() -> String {
    let mut report = String::new();

    for document in DocumentCategory::ALL {
        for record in RecordCategory::ALL {
            let outcome = match resolve_template(document.as_str(), record.as_str()) {
                Ok(descriptor) => descriptor.to_string(),
                Err(error) => error.to_string(),
            };
            report.push_str(&format!("[{},{}] => {}\n", document, record, outcome));
        }
    }

    report
}
