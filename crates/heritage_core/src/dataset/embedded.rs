//! Authored demo dataset.
//!
//! # Responsibility
//! - Reproduce the Wilson / Johnson / Martinez family table the demo
//!   presentation renders, in authored order.
//!
//! # Invariants
//! - Ids, names and relationship links stay exactly as authored; the
//!   embedded-dataset tests pin the table against accidental edits.

use crate::model::person::{Generation, Person, PersonId};

#[derive(Clone, Copy)]
struct Authored {
    id: PersonId,
    name: &'static str,
    birthday: &'static str,
    phone: &'static str,
    generation: Generation,
    spouse: Option<PersonId>,
    parents: Option<&'static [PersonId]>,
    children: Option<&'static [PersonId]>,
}

impl Authored {
    fn into_person(self) -> Person {
        // Email addresses in the authored table are all derived from the
        // name the same way; keep that rule in one place.
        let email = format!(
            "{}@email.com",
            self.name
                .to_lowercase()
                .replace(' ', ".")
                .replace('é', "e")
        );
        Person {
            id: self.id,
            name: self.name.to_string(),
            birthday: self.birthday.to_string(),
            email,
            phone: self.phone.to_string(),
            generation: self.generation,
            spouse: self.spouse,
            parents: self.parents.map(<[PersonId]>::to_vec),
            children: self.children.map(<[PersonId]>::to_vec),
        }
    }
}

const AUTHORED: &[Authored] = &[
    // Grandparents
    Authored {
        id: 1,
        name: "James Wilson",
        birthday: "March 15, 1945",
        phone: "+1 555-0101",
        generation: Generation::Grandparent,
        spouse: Some(2),
        parents: None,
        children: Some(&[5]),
    },
    Authored {
        id: 2,
        name: "Mary Wilson",
        birthday: "June 22, 1948",
        phone: "+1 555-0102",
        generation: Generation::Grandparent,
        spouse: Some(1),
        parents: None,
        children: Some(&[5]),
    },
    Authored {
        id: 3,
        name: "David Johnson",
        birthday: "September 8, 1943",
        phone: "+1 555-0103",
        generation: Generation::Grandparent,
        spouse: Some(4),
        parents: None,
        children: Some(&[6]),
    },
    Authored {
        id: 4,
        name: "Patricia Johnson",
        birthday: "December 12, 1946",
        phone: "+1 555-0104",
        generation: Generation::Grandparent,
        spouse: Some(3),
        parents: None,
        children: Some(&[6]),
    },
    Authored {
        id: 10,
        name: "José Martinez",
        birthday: "May 3, 1968",
        phone: "+1 555-0110",
        generation: Generation::Grandparent,
        spouse: Some(11),
        parents: None,
        children: Some(&[8]),
    },
    Authored {
        id: 11,
        name: "Maria Martinez",
        birthday: "February 18, 1970",
        phone: "+1 555-0111",
        generation: Generation::Grandparent,
        spouse: Some(10),
        parents: None,
        children: Some(&[8]),
    },
    // Parents
    Authored {
        id: 5,
        name: "Robert Wilson",
        birthday: "April 10, 1970",
        phone: "+1 555-0105",
        generation: Generation::Parent,
        spouse: Some(6),
        parents: Some(&[1, 2]),
        children: Some(&[7, 9]),
    },
    Authored {
        id: 6,
        name: "Sarah Wilson",
        birthday: "August 5, 1972",
        phone: "+1 555-0106",
        generation: Generation::Parent,
        spouse: Some(5),
        parents: Some(&[3, 4]),
        children: Some(&[7, 9]),
    },
    // Children
    Authored {
        id: 7,
        name: "Emily Martinez",
        birthday: "January 20, 1995",
        phone: "+1 555-0107",
        generation: Generation::Child,
        spouse: Some(8),
        parents: Some(&[5, 6]),
        children: Some(&[12, 13]),
    },
    Authored {
        id: 8,
        name: "Carlos Martinez",
        birthday: "July 14, 1994",
        phone: "+1 555-0108",
        generation: Generation::Child,
        spouse: Some(7),
        parents: Some(&[10, 11]),
        children: Some(&[12, 13]),
    },
    Authored {
        id: 9,
        name: "Michael Wilson",
        birthday: "November 8, 1998",
        phone: "+1 555-0109",
        generation: Generation::Child,
        spouse: None,
        parents: Some(&[5, 6]),
        children: None,
    },
    // Grandchildren
    Authored {
        id: 12,
        name: "Sofia Martinez",
        birthday: "March 10, 2018",
        phone: "+1 555-0112",
        generation: Generation::Grandchild,
        spouse: None,
        parents: Some(&[7, 8]),
        children: None,
    },
    Authored {
        id: 13,
        name: "Lucas Martinez",
        birthday: "June 15, 2020",
        phone: "+1 555-0113",
        generation: Generation::Grandchild,
        spouse: None,
        parents: Some(&[7, 8]),
        children: None,
    },
];

/// The authored demo collection, in authored order.
///
/// Returns fresh owned records each call so callers can hand them straight
/// to `FamilyStore::new`.
pub fn embedded_members() -> Vec<Person> {
    AUTHORED.iter().map(|authored| authored.into_person()).collect()
}
