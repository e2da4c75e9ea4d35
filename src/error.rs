//! Error types for vocabulary parsing and template resolution

use std::fmt;

use thiserror::Error;

use crate::vocabulary::{DocumentCategory, RecordCategory};

/// The vocabularies a raw token can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    DocumentCategory,
    RecordCategory,
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DocumentCategory => "document category",
            Self::RecordCategory => "record category",
        };
        f.write_str(name)
    }
}

/// Errors from parsing a raw token into a vocabulary member
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token names no member of the vocabulary it was checked against
    #[error("unknown {vocabulary} token: '{token}'")]
    UnknownToken { token: String, vocabulary: Vocabulary },
}

/// The precise cause of a resolution failure
///
/// Kept for diagnostics and logging only. Callers of
/// [`resolve_template`](crate::resolve_template) see the canonical
/// [`ResolutionError`] message for every cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionFailure {
    /// One of the two selector tokens failed to parse
    InvalidSelector(ParseError),
    /// Both tokens parsed, but no registry entry covers the pair
    NoTemplateForCombination {
        document: DocumentCategory,
        record: RecordCategory,
    },
}

/// Failure of [`resolve_template`](crate::resolve_template)
///
/// Displays the same canonical message regardless of the underlying cause,
/// so the external contract stays stable as the vocabularies evolve. The
/// cause itself remains available through [`failure`](Self::failure).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid Document template type or record type")]
pub struct ResolutionError {
    failure: ResolutionFailure,
}

impl ResolutionError {
    pub(crate) fn new(failure: ResolutionFailure) -> Self {
        Self { failure }
    }

    /// The precise failure, never part of the displayed message
    pub fn failure(&self) -> &ResolutionFailure {
        &self.failure
    }
}

impl From<ParseError> for ResolutionError {
    fn from(err: ParseError) -> Self {
        Self::new(ResolutionFailure::InvalidSelector(err))
    }
}
