//! Heritage use-case service.
//!
//! # Responsibility
//! - Provide the read-side entry points the presentation layer calls.
//! - Keep callers decoupled from store and query internals.
//!
//! # Invariants
//! - Service APIs never mutate the store; every call is a pure read.
//! - Debouncing, memoization and render scheduling stay with the caller.

use crate::model::person::{Person, PersonId};
use crate::query::family::{immediate_family, FamilyView};
use crate::query::search::{search_members, SearchQuery};
use crate::store::family_store::FamilyStore;
use log::debug;

/// Read-side facade over a family store.
pub struct HeritageService {
    store: FamilyStore,
}

impl HeritageService {
    /// Creates a service owning the provided store.
    pub fn new(store: FamilyStore) -> Self {
        Self { store }
    }

    /// Searches member names with default options.
    ///
    /// # Contract
    /// - Case-insensitive substring match against `name`.
    /// - Blank query returns no hits.
    /// - Hits preserve stored order.
    pub fn search(&self, text: &str) -> Vec<&Person> {
        self.search_with(&SearchQuery::new(text))
    }

    /// Searches member names with explicit filter/limit options.
    pub fn search_with(&self, query: &SearchQuery) -> Vec<&Person> {
        let hits = search_members(&self.store, query);
        debug!(
            "event=search_members module=query status=ok hits={}",
            hits.len()
        );
        hits
    }

    /// Gets one member by id; `None` when the id is unknown.
    pub fn member(&self, id: PersonId) -> Option<&Person> {
        self.store.get_by_id(id)
    }

    /// All members in stored order.
    pub fn members(&self) -> &[Person] {
        self.store.all()
    }

    /// Expands a member id into an immediate-family view.
    ///
    /// Returns `None` when the id does not resolve; an id obtained from
    /// `search` or `members` always resolves.
    pub fn family_of(&self, id: PersonId) -> Option<FamilyView<'_>> {
        let member = self.store.get_by_id(id)?;
        let view = immediate_family(&self.store, member);
        debug!(
            "event=immediate_family module=query status=ok member={} parents={} children={}",
            member.id,
            view.parents.len(),
            view.children.len()
        );
        Some(view)
    }

    /// The underlying store, for audits and direct traversal.
    pub fn store(&self) -> &FamilyStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::HeritageService;
    use crate::dataset::embedded_members;
    use crate::store::family_store::FamilyStore;

    fn service() -> HeritageService {
        HeritageService::new(FamilyStore::new(embedded_members()).unwrap())
    }

    #[test]
    fn search_and_expand_compose() {
        let service = service();
        let hits = service.search("robert");
        assert_eq!(hits.len(), 1);

        let view = service.family_of(hits[0].id).unwrap();
        assert_eq!(view.parents.len(), 2);
    }

    #[test]
    fn unknown_id_yields_no_family_view() {
        assert!(service().family_of(9999).is_none());
    }

    #[test]
    fn store_accessor_supports_the_audit_use_case() {
        let service = service();
        assert!(service.store().check_consistency().is_empty());
        assert_eq!(service.store().len(), service.members().len());
    }
}
