//! Taxonomy domains, category codes and display metadata.
//!
//! # Responsibility
//! - Name the fixed set of taxonomy domains.
//! - Map category codes within a domain to their icon record.
//!
//! # Invariants
//! - Domain names are lowercase snake_case and parsed strictly.
//! - Every category record carries an icon; `"unknown"` marks "no icon".
//! - Category codes may encode hierarchy as `parent:child`; this module only
//!   exposes the split, it never enforces that parents exist.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Icon placeholder for categories without an assigned icon.
pub const UNKNOWN_ICON: &str = "unknown";

/// Separator between parent and child segments of a category code.
pub const CATEGORY_SEPARATOR: char = ':';

/// Category namespace.
///
/// Variants are declared in the lexical order of their wire names so map
/// iteration matches sorted JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxonomyDomain {
    /// User age bracket.
    Age,
    EnglishLevel,
    /// Top-level topics shown on the explore screen.
    Explore,
    /// Audience groups such as `low_income`.
    Group,
    ImmigrantType,
    RefugeeClaimStage,
    TimeInCanada,
    User,
}

impl TaxonomyDomain {
    pub const ALL: [TaxonomyDomain; 8] = [
        Self::Age,
        Self::EnglishLevel,
        Self::Explore,
        Self::Group,
        Self::ImmigrantType,
        Self::RefugeeClaimStage,
        Self::TimeInCanada,
        Self::User,
    ];

    /// Stable wire name used in fixtures and taxonomy files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::EnglishLevel => "english_level",
            Self::Explore => "explore",
            Self::Group => "group",
            Self::ImmigrantType => "immigrant_type",
            Self::RefugeeClaimStage => "refugee_claim_stage",
            Self::TimeInCanada => "time_in_canada",
            Self::User => "user",
        }
    }
}

impl Display for TaxonomyDomain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaxonomyDomain {
    type Err = TaxonomyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_taxonomy_domain(value)
    }
}

/// Parses one domain from its wire name.
pub fn parse_taxonomy_domain(value: &str) -> Result<TaxonomyDomain, TaxonomyError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(TaxonomyError::EmptyDomain);
    }
    TaxonomyDomain::ALL
        .into_iter()
        .find(|domain| domain.as_str() == normalized)
        .ok_or_else(|| TaxonomyError::UnknownDomain(normalized.to_string()))
}

/// Display metadata for one category code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyIcon {
    /// Opaque icon identifier understood by the rendering layer.
    pub icon: String,
}

impl TaxonomyIcon {
    pub fn new(icon: impl Into<String>) -> Self {
        Self { icon: icon.into() }
    }

    pub fn unknown() -> Self {
        Self::new(UNKNOWN_ICON)
    }

    pub fn is_unknown(&self) -> bool {
        self.icon == UNKNOWN_ICON
    }
}

impl Default for TaxonomyIcon {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Category code -> icon record for one domain.
pub type CategoryMap = BTreeMap<String, TaxonomyIcon>;

/// Domain -> category map.
pub type TaxonomyMap = BTreeMap<TaxonomyDomain, CategoryMap>;

/// Returns the parent code of a `parent:child` category, if any.
///
/// Multi-level codes take the longest proper prefix: `a:b:c` -> `a:b`.
pub fn parent_code(code: &str) -> Option<&str> {
    code.rsplit_once(CATEGORY_SEPARATOR)
        .map(|(parent, _)| parent)
        .filter(|parent| !parent.is_empty())
}

/// Reference from content to one taxonomy term.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyTermRef {
    pub taxonomy_id: TaxonomyDomain,
    pub taxonomy_term_id: String,
}

impl TaxonomyTermRef {
    pub fn new(taxonomy_id: TaxonomyDomain, taxonomy_term_id: impl Into<String>) -> Self {
        Self {
            taxonomy_id,
            taxonomy_term_id: taxonomy_term_id.into(),
        }
    }
}

impl Display for TaxonomyTermRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.taxonomy_id, CATEGORY_SEPARATOR, self.taxonomy_term_id
        )
    }
}

/// Taxonomy name/term parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    EmptyDomain,
    UnknownDomain(String),
    /// Item is not `domain:term` or has whitespace around the colon.
    InvalidTermFormat(String),
    /// `explore` term outside the recognised explore set.
    InvalidExploreTerm(String),
}

impl Display for TaxonomyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDomain => write!(f, "taxonomy domain must not be empty"),
            Self::UnknownDomain(value) => write!(f, "taxonomy domain is unknown: {value}"),
            Self::InvalidTermFormat(value) => {
                write!(f, "\"{value}\" : Invalid taxonomy term format")
            }
            Self::InvalidExploreTerm(value) => {
                write!(f, "Invalid explore taxonomy term \"{value}\"")
            }
        }
    }
}

impl Error for TaxonomyError {}
