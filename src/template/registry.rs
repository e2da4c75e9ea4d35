//! Fixed registry of supported (document, record) template mappings

use std::fmt;

use serde::Serialize;

use crate::vocabulary::{DocumentCategory, RecordCategory};

/// A resolved reference to a template artifact
///
/// `template_id` is an opaque identifier owned by the external template
/// system; `template_file` is a resource name. The engine never opens the
/// file or renders the template — it only hands out the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateDescriptor {
    pub document: DocumentCategory,
    pub record: RecordCategory,
    pub template_id: &'static str,
    pub template_file: &'static str,
}

impl fmt::Display for TemplateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.template_id, self.template_file)
    }
}

/// The supported business combinations. A pair absent from this table is
/// unsupported on purpose, not an omission to be defaulted.
const STANDARD_ENTRIES: &[TemplateDescriptor] = &[
    TemplateDescriptor {
        document: DocumentCategory::Glpp,
        record: RecordCategory::IndividualProspect,
        template_id: "GUIDEPP",
        template_file: "GLPP.ftl",
    },
    TemplateDescriptor {
        document: DocumentCategory::Glpm,
        record: RecordCategory::LegalProspect,
        template_id: "GUIDEPM",
        template_file: "GLPM.ftl",
    },
    TemplateDescriptor {
        document: DocumentCategory::IdCard,
        record: RecordCategory::IndividualProspect,
        template_id: "IDCARDPP",
        template_file: "ID_CARD.ftl",
    },
    TemplateDescriptor {
        document: DocumentCategory::IdCard,
        record: RecordCategory::IndividualClient,
        template_id: "IDCARDPP",
        template_file: "ID_CARD.ftl",
    },
];

/// Immutable table of supported (document, record) → descriptor mappings
///
/// Built once from a fixed literal table and never mutated afterwards, so it
/// is safe to read from any number of concurrent callers without locking.
/// There is no registration API: changing the ruleset means changing the
/// table and the committed combination report with it.
#[derive(Debug)]
pub struct TemplateRegistry {
    entries: &'static [TemplateDescriptor],
}

impl TemplateRegistry {
    /// The process-wide registry holding the standard ruleset
    pub fn standard() -> &'static Self {
        static STANDARD: TemplateRegistry = TemplateRegistry {
            entries: STANDARD_ENTRIES,
        };
        &STANDARD
    }

    /// Entries in table order
    pub fn entries(&self) -> impl Iterator<Item = &TemplateDescriptor> {
        self.entries.iter()
    }

    /// Find the entry for a category pair
    ///
    /// The (document, record) pair is unique across entries, so the first
    /// match is the only match.
    pub fn find(
        &self,
        document: DocumentCategory,
        record: RecordCategory,
    ) -> Option<&TemplateDescriptor> {
        self.entries
            .iter()
            .find(|entry| entry.document == document && entry.record == record)
    }
}
