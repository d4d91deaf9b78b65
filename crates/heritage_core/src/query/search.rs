//! Substring name search.
//!
//! # Responsibility
//! - Match person names case-insensitively against free-form query text.
//! - Keep result ordering identical to stored order; no ranking.
//!
//! # Invariants
//! - A blank query yields an empty result, never the full collection.
//! - Matching is plain substring containment, not token or fuzzy matching.

use crate::model::person::{Generation, Person};
use crate::store::family_store::FamilyStore;

/// Search options for name matching.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// User query text; trimmed only to detect blank queries.
    pub text: String,
    /// Optional generation filter applied after name matching.
    pub generation: Option<Generation>,
    /// Maximum number of hits to return; `None` means unbounded.
    pub limit: Option<usize>,
}

impl SearchQuery {
    /// Creates a query with no filter and no limit.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            generation: None,
            limit: None,
        }
    }
}

/// Searches person names and returns hits in stored order.
///
/// Both the query and each candidate name are Unicode-lowercased before the
/// containment test, so "josé" finds "José Martinez". Trimming decides only
/// whether the query is blank; the containment test uses the query as
/// typed, so surrounding whitespace must appear in the name to match.
pub fn search_members<'a>(store: &'a FamilyStore, query: &SearchQuery) -> Vec<&'a Person> {
    if query.text.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.text.to_lowercase();

    let hits = store
        .all()
        .iter()
        .filter(|person| person.name.to_lowercase().contains(&needle))
        .filter(|person| {
            query
                .generation
                .is_none_or(|generation| person.generation == generation)
        });

    match query.limit {
        Some(limit) => hits.take(limit).collect(),
        None => hits.collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{search_members, SearchQuery};
    use crate::model::person::{Generation, Person};
    use crate::store::family_store::FamilyStore;

    fn person(id: u32, name: &str, generation: Generation) -> Person {
        Person {
            id,
            name: name.to_string(),
            birthday: "January 1, 1970".to_string(),
            email: "x@email.com".to_string(),
            phone: "+1 555-0000".to_string(),
            generation,
            spouse: None,
            parents: None,
            children: None,
        }
    }

    fn sample_store() -> FamilyStore {
        FamilyStore::new(vec![
            person(1, "James Wilson", Generation::Grandparent),
            person(2, "José Martinez", Generation::Grandparent),
            person(3, "Sarah Wilson", Generation::Parent),
        ])
        .unwrap()
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let store = sample_store();
        let hits = search_members(&store, &SearchQuery::new("WILSON"));
        let ids: Vec<_> = hits.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn non_ascii_names_match_case_insensitively() {
        let store = sample_store();
        let hits = search_members(&store, &SearchQuery::new("JOSÉ"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn blank_query_yields_no_hits() {
        let store = sample_store();
        assert!(search_members(&store, &SearchQuery::new("")).is_empty());
        assert!(search_members(&store, &SearchQuery::new("   ")).is_empty());
    }

    #[test]
    fn generation_filter_narrows_hits() {
        let store = sample_store();
        let mut query = SearchQuery::new("wilson");
        query.generation = Some(Generation::Parent);
        let hits = search_members(&store, &query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);
    }

    #[test]
    fn limit_truncates_in_stored_order() {
        let store = sample_store();
        let mut query = SearchQuery::new("wilson");
        query.limit = Some(1);
        let hits = search_members(&store, &query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn limit_zero_yields_no_hits() {
        let store = sample_store();
        let mut query = SearchQuery::new("wilson");
        query.limit = Some(0);
        assert!(search_members(&store, &query).is_empty());
    }
}
