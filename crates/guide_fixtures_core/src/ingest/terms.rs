//! Taxonomy tag file parsing.
//!
//! A taxonomy file holds comma-separated `domain:term` items, for example
//! `explore:education, group:low_income`.

use crate::fixtures::taxonomies::{GENERATED_EXPLORE_BASE, SYSTEM_EXPLORE_TERMS};
use crate::ingest::path::parse_content_location;
use crate::ingest::read::ContentFile;
use crate::ingest::{IngestError, IngestResult};
use crate::model::taxonomy::{
    parse_taxonomy_domain, TaxonomyDomain, TaxonomyError, TaxonomyTermRef, CATEGORY_SEPARATOR,
};

/// Tag linking one content item to one taxonomy term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyTermReference {
    pub term: TaxonomyTermRef,
    pub content_type: String,
    pub content_id: String,
}

/// Parses the items of one taxonomy file. Blank items are skipped.
///
/// # Errors
/// - `InvalidTermFormat` for items without a colon, with whitespace around
///   the colon, or with an empty term.
/// - `UnknownDomain` / `EmptyDomain` for unrecognised domains.
/// - `InvalidExploreTerm` for explore terms outside the recognised set.
pub fn parse_taxonomy_terms(content: &str) -> Result<Vec<TaxonomyTermRef>, TaxonomyError> {
    let mut result = Vec::new();
    for item in content.split(',') {
        if item.trim().is_empty() {
            continue;
        }
        if item.contains(" :") || item.contains(": ") {
            return Err(TaxonomyError::InvalidTermFormat(item.to_string()));
        }
        let (domain, term) = item
            .split_once(CATEGORY_SEPARATOR)
            .ok_or_else(|| TaxonomyError::InvalidTermFormat(item.to_string()))?;
        let domain = parse_taxonomy_domain(domain)?;
        let term = term.trim();
        if term.is_empty() {
            return Err(TaxonomyError::InvalidTermFormat(item.to_string()));
        }
        validate_term(domain, term)?;
        result.push(TaxonomyTermRef::new(domain, term));
    }
    Ok(result)
}

/// Returns whether `term` may be used in the explore domain.
pub fn is_known_explore_term(term: &str) -> bool {
    SYSTEM_EXPLORE_TERMS.contains(&term)
        || GENERATED_EXPLORE_BASE.iter().any(|(code, _)| *code == term)
}

fn validate_term(domain: TaxonomyDomain, term: &str) -> Result<(), TaxonomyError> {
    if domain == TaxonomyDomain::Explore && !is_known_explore_term(term) {
        return Err(TaxonomyError::InvalidExploreTerm(term.to_string()));
    }
    Ok(())
}

/// Parses every taxonomy file into content tags.
pub fn parse_taxonomy_files(files: &[ContentFile]) -> IngestResult<Vec<TaxonomyTermReference>> {
    let mut result = Vec::new();
    for file in files {
        let location = parse_content_location(&file.path)?;
        let terms = parse_taxonomy_terms(&file.content).map_err(|source| IngestError::Taxonomy {
            path: file.path.display().to_string(),
            source,
        })?;
        result.extend(terms.into_iter().map(|term| TaxonomyTermReference {
            term,
            content_type: location.content_type.clone(),
            content_id: location.id.clone(),
        }));
    }
    Ok(result)
}
