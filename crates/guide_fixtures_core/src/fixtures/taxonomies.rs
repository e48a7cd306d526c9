//! Newcomers Guide taxonomy fixtures.
//!
//! # Responsibility
//! - Hold the taxonomy seed tables as `(domain, code, icon)` rows.
//! - Build the `taxonomyMap` store slice for each recorded variant.
//!
//! # Invariants
//! - Every row has a non-empty icon; `"unknown"` marks "no icon assigned".
//! - Both variants cover the `age`, `explore` and `group` domains.
//!
//! The legacy and generated variants disagree on explore key casing and
//! membership. Neither is treated as authoritative; see
//! `taxonomy::drift::explore_key_drift`.

use crate::model::store::Store;
use crate::model::taxonomy::TaxonomyDomain::{Age, Explore, Group};
use crate::model::taxonomy::{
    CategoryMap, TaxonomyDomain, TaxonomyIcon, TaxonomyMap, UNKNOWN_ICON,
};
use log::debug;
use once_cell::sync::Lazy;
use std::fmt::{Display, Formatter};

type TaxonomyRow = (TaxonomyDomain, &'static str, &'static str);

/// Recorded taxonomy fixture variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxonomyVariant {
    /// Hand-maintained fixture: PascalCase explore topics plus flat and
    /// `parent:child` explore codes.
    Legacy,
    /// Shape written by the fixture generator: camelCase explore topics.
    Generated,
}

impl TaxonomyVariant {
    pub const ALL: [TaxonomyVariant; 2] = [Self::Legacy, Self::Generated];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Generated => "generated",
        }
    }

    fn rows(self) -> &'static [TaxonomyRow] {
        match self {
            Self::Legacy => LEGACY_ROWS,
            Self::Generated => GENERATED_ROWS,
        }
    }
}

impl Display for TaxonomyVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explore topics the fixture generator always writes, with their icons.
pub const GENERATED_EXPLORE_BASE: &[(&str, &str)] = &[
    ("driving", "car"),
    ("education", "book-open-variant"),
    ("employment", "briefcase"),
    ("healthCare", "medical-bag"),
    ("helpForIndividualsAndFamilies", "account"),
    ("housing", "home"),
    ("legalOrImmigration", "gavel"),
    ("money", "currency-usd"),
    ("settlingIn", "sign-text"),
];

/// Explore terms content authors may tag with.
pub const SYSTEM_EXPLORE_TERMS: &[&str] = &[
    "driving",
    "education",
    "employment",
    "healthCare",
    "helpForIndividualsAndFamilies",
    "housing",
    "legal",
    "money",
    "settling_in",
];

const LEGACY_ROWS: &[TaxonomyRow] = &[
    (Age, "13_to_18", UNKNOWN_ICON),
    (Age, "18_to_64", UNKNOWN_ICON),
    (Age, "over_65", UNKNOWN_ICON),
    (Age, "under_13", UNKNOWN_ICON),
    (Explore, "Driving", "car"),
    (Explore, "Education", "book-open-variant"),
    (Explore, "Employment", "briefcase"),
    (Explore, "HealthCare", "medical-bag"),
    (Explore, "HelpForIndividualsAndFamilies", "account"),
    (Explore, "Housing", "home"),
    (Explore, "LegalOrImmigration", "gavel"),
    (Explore, "Money", "currency-usd"),
    (Explore, "SettlingIn", "sign-text"),
    (Explore, "citizenship", UNKNOWN_ICON),
    (Explore, "education", UNKNOWN_ICON),
    (Explore, "education:distance", UNKNOWN_ICON),
    (Explore, "education:french_program", UNKNOWN_ICON),
    (Explore, "education:homeschool", UNKNOWN_ICON),
    (Explore, "education:learn_english", UNKNOWN_ICON),
    (Explore, "education:post_secondary", UNKNOWN_ICON),
    (Explore, "education:school_registeration", UNKNOWN_ICON),
    (Explore, "government", UNKNOWN_ICON),
    (Explore, "immigration", UNKNOWN_ICON),
    (Explore, "legal", UNKNOWN_ICON),
    (Explore, "legal:court", UNKNOWN_ICON),
    (Explore, "legal:discrimination", UNKNOWN_ICON),
    (Explore, "legal:legal_help", UNKNOWN_ICON),
    (Explore, "legal:police", UNKNOWN_ICON),
    (Explore, "legal:privacy", UNKNOWN_ICON),
    (Explore, "money", UNKNOWN_ICON),
    (Group, "disability", UNKNOWN_ICON),
    (Group, "lgbtq2", UNKNOWN_ICON),
    (Group, "low_income", UNKNOWN_ICON),
];

const GENERATED_ROWS: &[TaxonomyRow] = &[
    (Age, "13_to_18", UNKNOWN_ICON),
    (Age, "18_to_64", UNKNOWN_ICON),
    (Age, "over_65", UNKNOWN_ICON),
    (Age, "under_13", UNKNOWN_ICON),
    (Explore, "driving", "car"),
    (Explore, "education", "book-open-variant"),
    (Explore, "employment", "briefcase"),
    (Explore, "healthCare", "medical-bag"),
    (Explore, "helpForIndividualsAndFamilies", "account"),
    (Explore, "housing", "home"),
    (Explore, "legalOrImmigration", "gavel"),
    (Explore, "money", "currency-usd"),
    (Explore, "settlingIn", "sign-text"),
    (Group, "disability", UNKNOWN_ICON),
    (Group, "lgbtq2", UNKNOWN_ICON),
    (Group, "low_income", UNKNOWN_ICON),
];

/// Returns the generator's explore base categories.
pub fn generated_explore_base() -> CategoryMap {
    GENERATED_EXPLORE_BASE
        .iter()
        .map(|(code, icon)| (code.to_string(), TaxonomyIcon::new(*icon)))
        .collect()
}

fn build_from_rows(variant: TaxonomyVariant) -> Store {
    let mut map = TaxonomyMap::new();
    for (domain, code, icon) in variant.rows() {
        map.entry(*domain)
            .or_default()
            .insert(code.to_string(), TaxonomyIcon::new(*icon));
    }
    debug!(
        "event=fixture_built module=fixtures status=ok fixture=taxonomies variant={} domains={}",
        variant,
        map.len()
    );
    Store::with_taxonomies(map)
}

static LEGACY_FIXTURE: Lazy<Store> = Lazy::new(|| build_from_rows(TaxonomyVariant::Legacy));
static GENERATED_FIXTURE: Lazy<Store> =
    Lazy::new(|| build_from_rows(TaxonomyVariant::Generated));

/// Returns the shared, read-only taxonomy fixture for one variant.
pub fn taxonomy_fixture(variant: TaxonomyVariant) -> &'static Store {
    match variant {
        TaxonomyVariant::Legacy => &LEGACY_FIXTURE,
        TaxonomyVariant::Generated => &GENERATED_FIXTURE,
    }
}

/// Returns an independently owned copy of the legacy taxonomy fixture.
pub fn build_taxonomy_fixture() -> Store {
    build_taxonomy_fixture_variant(TaxonomyVariant::Legacy)
}

/// Returns an independently owned copy of one taxonomy fixture variant.
pub fn build_taxonomy_fixture_variant(variant: TaxonomyVariant) -> Store {
    taxonomy_fixture(variant).clone()
}
