//! Closed vocabularies for document and record classification
//!
//! Tokens arrive from an external system as raw strings and are parsed with
//! an exact, case-sensitive match against the canonical spelling — no
//! trimming, no case folding. Both vocabularies are fixed at build time;
//! adding a member means touching every `match` below, which is the point.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ParseError, Vocabulary};

/// Document kinds that require a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentCategory {
    /// Guarantee letter for an individual
    Glpp,
    /// Guarantee letter for a legal entity
    Glpm,
    /// Generic identity document
    IdCard,
}

impl DocumentCategory {
    /// All members, in declaration order
    pub const ALL: [Self; 3] = [Self::Glpp, Self::Glpm, Self::IdCard];

    /// Canonical token spelling, exactly as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Glpp => "GLPP",
            Self::Glpm => "GLPM",
            Self::IdCard => "ID_CARD",
        }
    }
}

impl FromStr for DocumentCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GLPP" => Ok(Self::Glpp),
            "GLPM" => Ok(Self::Glpm),
            "ID_CARD" => Ok(Self::IdCard),
            _ => Err(ParseError::UnknownToken {
                token: s.to_string(),
                vocabulary: Vocabulary::DocumentCategory,
            }),
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of record/party a document pertains to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordCategory {
    IndividualProspect,
    LegalProspect,
    IndividualClient,
    LegalClient,
}

impl RecordCategory {
    /// All members, in declaration order
    pub const ALL: [Self; 4] = [
        Self::IndividualProspect,
        Self::LegalProspect,
        Self::IndividualClient,
        Self::LegalClient,
    ];

    /// Canonical token spelling, exactly as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IndividualProspect => "INDIVIDUAL_PROSPECT",
            Self::LegalProspect => "LEGAL_PROSPECT",
            Self::IndividualClient => "INDIVIDUAL_CLIENT",
            Self::LegalClient => "LEGAL_CLIENT",
        }
    }
}

impl FromStr for RecordCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INDIVIDUAL_PROSPECT" => Ok(Self::IndividualProspect),
            "LEGAL_PROSPECT" => Ok(Self::LegalProspect),
            "INDIVIDUAL_CLIENT" => Ok(Self::IndividualClient),
            "LEGAL_CLIENT" => Ok(Self::LegalClient),
            _ => Err(ParseError::UnknownToken {
                token: s.to_string(),
                vocabulary: Vocabulary::RecordCategory,
            }),
        }
    }
}

impl fmt::Display for RecordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
