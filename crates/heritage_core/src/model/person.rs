//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical family-member record and its relationship links.
//! - Keep the unset vs. empty distinction for optional link lists explicit.
//!
//! # Invariants
//! - `id` is authored at data-entry time and never generated at runtime.
//! - `name` is non-blank for every record accepted by a store.
//! - Relationship fields hold ids only; resolution happens in the query layer.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Authored identifier for a family member.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonId = u32;

/// Tree-depth label assigned by the dataset author.
///
/// The label is authored metadata, not derived from the relationship graph;
/// nothing guarantees it agrees with the person's actual parents/children
/// (see `store::consistency` for the audit that flags disagreements).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Generation {
    /// Root generation of the authored tree.
    Grandparent,
    Parent,
    Child,
    Grandchild,
}

impl Display for Generation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Grandparent => "Grandparent",
            Self::Parent => "Parent",
            Self::Child => "Child",
            Self::Grandchild => "Grandchild",
        };
        f.pad(label)
    }
}

/// One record in the family dataset.
///
/// Relationship fields are stored as ids, not nested records, so one flat
/// collection can describe the whole graph without duplication. `parents`
/// and `children` stay `Option<Vec<..>>` because an authored empty list and
/// an absent field are different statements about the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Stable authored id used for all relationship links.
    pub id: PersonId,
    pub name: String,
    /// Display-formatted date text, e.g. "March 15, 1945". Never parsed.
    pub birthday: String,
    pub email: String,
    pub phone: String,
    pub generation: Generation,
    /// Id of the spouse record, when authored. Symmetry is expected but
    /// not enforced; traversal uses only this stored direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse: Option<PersonId>,
    /// Parent ids in authored order. Conceptually at most two, but any
    /// length is tolerated downstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<PersonId>>,
    /// Child ids in authored order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PersonId>>,
}

/// Validation error for a single malformed person record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    /// `name` is empty or whitespace-only.
    BlankName(PersonId),
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName(id) => write!(f, "person {id} has a blank name"),
        }
    }
}

impl Error for PersonValidationError {}

impl Person {
    /// Checks the record against construction-boundary rules.
    ///
    /// The only malformed shape rejected here is a blank name; relationship
    /// integrity is a store-level concern, not a per-record one.
    pub fn validate(&self) -> Result<(), PersonValidationError> {
        if self.name.trim().is_empty() {
            return Err(PersonValidationError::BlankName(self.id));
        }
        Ok(())
    }

    /// Parent ids as a slice, treating an unset field as empty.
    pub fn parent_ids(&self) -> &[PersonId] {
        self.parents.as_deref().unwrap_or_default()
    }

    /// Child ids as a slice, treating an unset field as empty.
    pub fn child_ids(&self) -> &[PersonId] {
        self.children.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{Generation, Person, PersonValidationError};

    fn minimal_person(id: u32, name: &str) -> Person {
        Person {
            id,
            name: name.to_string(),
            birthday: "January 1, 1970".to_string(),
            email: "someone@email.com".to_string(),
            phone: "+1 555-0000".to_string(),
            generation: Generation::Parent,
            spouse: None,
            parents: None,
            children: None,
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        let person = minimal_person(7, "   ");
        assert_eq!(
            person.validate(),
            Err(PersonValidationError::BlankName(7))
        );
    }

    #[test]
    fn unset_links_read_as_empty_slices() {
        let person = minimal_person(1, "Someone");
        assert!(person.parent_ids().is_empty());
        assert!(person.child_ids().is_empty());
    }

    #[test]
    fn generation_labels_match_authored_dataset() {
        let json = serde_json::to_string(&Generation::Grandparent).unwrap();
        assert_eq!(json, "\"Grandparent\"");
    }

    #[test]
    fn absent_links_survive_json_round_trip_as_absent() {
        let person = minimal_person(3, "Someone");
        let json = serde_json::to_string(&person).unwrap();
        assert!(!json.contains("parents"));

        let back: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(back.parents, None);
        assert_eq!(back.children, None);
    }

    #[test]
    fn empty_list_is_distinct_from_absent() {
        let mut person = minimal_person(4, "Someone");
        person.children = Some(Vec::new());
        let json = serde_json::to_string(&person).unwrap();

        let back: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(back.children, Some(Vec::new()));
    }
}
