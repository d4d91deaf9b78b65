//! Immediate-family expansion.
//!
//! # Responsibility
//! - Resolve one person's spouse, parents and children to full records.
//!
//! # Invariants
//! - Exactly one traversal step outward; the resolved records are never
//!   themselves expanded.
//! - Unresolvable ids are dropped from the output, never errors.
//! - Spouse resolution uses only the stored direction of the link.

use crate::model::person::{Person, PersonId};
use crate::store::family_store::FamilyStore;

/// One person's nuclear family, resolved to full records.
///
/// Borrows from the store: the collection is immutable for the process
/// lifetime, so views stay cheap and callers clone only for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyView<'a> {
    /// The person the view was expanded from, unchanged.
    pub member: &'a Person,
    /// Resolved spouse, when the member's link is set and resolves.
    pub spouse: Option<&'a Person>,
    /// Resolved parents in authored order; unresolvable ids are omitted.
    pub parents: Vec<&'a Person>,
    /// Resolved children in authored order; unresolvable ids are omitted.
    pub children: Vec<&'a Person>,
}

/// Expands one person into their immediate family.
///
/// Pure and deterministic: the same store contents and member always
/// produce the same view.
pub fn immediate_family<'a>(store: &'a FamilyStore, member: &'a Person) -> FamilyView<'a> {
    FamilyView {
        member,
        spouse: member.spouse.and_then(|id| store.get_by_id(id)),
        parents: resolve_ids(store, member.parent_ids()),
        children: resolve_ids(store, member.child_ids()),
    }
}

fn resolve_ids<'a>(store: &'a FamilyStore, ids: &[PersonId]) -> Vec<&'a Person> {
    ids.iter().filter_map(|&id| store.get_by_id(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::immediate_family;
    use crate::model::person::{Generation, Person};
    use crate::store::family_store::FamilyStore;

    fn person(id: u32, name: &str) -> Person {
        Person {
            id,
            name: name.to_string(),
            birthday: "January 1, 1970".to_string(),
            email: "x@email.com".to_string(),
            phone: "+1 555-0000".to_string(),
            generation: Generation::Parent,
            spouse: None,
            parents: None,
            children: None,
        }
    }

    #[test]
    fn spouse_resolves_from_stored_direction_only() {
        let mut a = person(1, "A");
        a.spouse = Some(2);
        let b = person(2, "B");
        let store = FamilyStore::new(vec![a, b]).unwrap();

        let view_a = immediate_family(&store, store.get_by_id(1).unwrap());
        assert_eq!(view_a.spouse.map(|p| p.id), Some(2));

        let view_b = immediate_family(&store, store.get_by_id(2).unwrap());
        assert!(view_b.spouse.is_none());
    }

    #[test]
    fn dangling_parent_ids_are_dropped() {
        let mut c = person(3, "C");
        c.parents = Some(vec![999, 1]);
        let store = FamilyStore::new(vec![person(1, "A"), c]).unwrap();

        let view = immediate_family(&store, store.get_by_id(3).unwrap());
        let parent_ids: Vec<_> = view.parents.iter().map(|p| p.id).collect();
        assert_eq!(parent_ids, [1]);
    }

    #[test]
    fn unset_links_expand_to_empty() {
        let store = FamilyStore::new(vec![person(1, "A")]).unwrap();
        let view = immediate_family(&store, store.get_by_id(1).unwrap());
        assert!(view.spouse.is_none());
        assert!(view.parents.is_empty());
        assert!(view.children.is_empty());
    }
}
