//! Relationship consistency audit.
//!
//! # Responsibility
//! - Surface authored-data defects the query layer otherwise papers over.
//! - Stay read-only: findings never block lenient construction.
//!
//! # Invariants
//! - Findings are reported in stored-record order, fields in
//!   spouse/parents/children order, so reports are stable across runs.

use crate::model::person::{Generation, PersonId};
use crate::store::family_store::FamilyStore;
use std::fmt::{Display, Formatter};

/// Which relationship field a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationField {
    Spouse,
    Parents,
    Children,
}

impl Display for RelationField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Spouse => "spouse",
            Self::Parents => "parents",
            Self::Children => "children",
        };
        write!(f, "{label}")
    }
}

/// One finding from the consistency audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyIssue {
    /// A relationship field references an id with no record in the store.
    DanglingReference {
        person_id: PersonId,
        field: RelationField,
        target: PersonId,
    },
    /// A spouse link whose target does not point back.
    AsymmetricSpouse {
        person_id: PersonId,
        spouse_id: PersonId,
    },
    /// A non-root generation label on a record with no parents authored.
    UnrootedGeneration {
        person_id: PersonId,
        generation: Generation,
    },
}

impl Display for ConsistencyIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingReference {
                person_id,
                field,
                target,
            } => write!(
                f,
                "person {person_id}: {field} references missing person {target}"
            ),
            Self::AsymmetricSpouse {
                person_id,
                spouse_id,
            } => write!(
                f,
                "person {person_id}: spouse {spouse_id} does not link back"
            ),
            Self::UnrootedGeneration {
                person_id,
                generation,
            } => write!(
                f,
                "person {person_id}: labeled {generation} but has no parents authored"
            ),
        }
    }
}

/// Runs every audit rule over the stored collection.
pub(crate) fn check_members(store: &FamilyStore) -> Vec<ConsistencyIssue> {
    let mut issues = Vec::new();

    for person in store.all() {
        if let Some(spouse_id) = person.spouse {
            match store.get_by_id(spouse_id) {
                None => issues.push(ConsistencyIssue::DanglingReference {
                    person_id: person.id,
                    field: RelationField::Spouse,
                    target: spouse_id,
                }),
                Some(spouse) if spouse.spouse != Some(person.id) => {
                    issues.push(ConsistencyIssue::AsymmetricSpouse {
                        person_id: person.id,
                        spouse_id,
                    });
                }
                Some(_) => {}
            }
        }

        for &parent_id in person.parent_ids() {
            if store.get_by_id(parent_id).is_none() {
                issues.push(ConsistencyIssue::DanglingReference {
                    person_id: person.id,
                    field: RelationField::Parents,
                    target: parent_id,
                });
            }
        }

        for &child_id in person.child_ids() {
            if store.get_by_id(child_id).is_none() {
                issues.push(ConsistencyIssue::DanglingReference {
                    person_id: person.id,
                    field: RelationField::Children,
                    target: child_id,
                });
            }
        }

        if person.generation != Generation::Grandparent && person.parents.is_none() {
            issues.push(ConsistencyIssue::UnrootedGeneration {
                person_id: person.id,
                generation: person.generation,
            });
        }
    }

    issues
}
