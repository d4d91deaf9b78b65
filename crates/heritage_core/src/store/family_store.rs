//! In-memory person store with id-indexed lookup.
//!
//! # Responsibility
//! - Accept the authored collection once and validate it at the boundary.
//! - Resolve ids to records without treating absence as failure.
//!
//! # Invariants
//! - Every accepted record passed `Person::validate()`.
//! - Ids are unique across the collection.
//! - `all()` returns records in the order they were supplied.

use crate::model::person::{Person, PersonId, PersonValidationError};
use crate::store::consistency::{check_members, ConsistencyIssue};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Construction error for a family store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(PersonValidationError),
    /// Two records share the same authored id.
    DuplicateId(PersonId),
    /// Strict construction found a relationship id with no matching record.
    DanglingReference(ConsistencyIssue),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate person id: {id}"),
            Self::DanglingReference(issue) => write!(f, "{issue}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::DanglingReference(_) => None,
        }
    }
}

impl From<PersonValidationError> for StoreError {
    fn from(value: PersonValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Read-only holder of all person records plus id-based lookup.
///
/// The collection is an explicit constructor argument, never ambient state,
/// so tests and deployments can substitute their own datasets freely.
#[derive(Debug, Clone)]
pub struct FamilyStore {
    members: Vec<Person>,
    by_id: HashMap<PersonId, usize>,
}

impl FamilyStore {
    /// Builds a store from an authored collection, tolerating relationship
    /// inconsistencies.
    ///
    /// Rejects blank names and duplicate ids; dangling relationship ids are
    /// accepted here and resolved by omission in the query layer.
    pub fn new(members: Vec<Person>) -> StoreResult<Self> {
        let mut by_id = HashMap::with_capacity(members.len());
        for (index, person) in members.iter().enumerate() {
            person.validate()?;
            if by_id.insert(person.id, index).is_some() {
                return Err(StoreError::DuplicateId(person.id));
            }
        }
        Ok(Self { members, by_id })
    }

    /// Builds a store that additionally fails on the first dangling
    /// relationship reference.
    ///
    /// Asymmetric spouse links and generation-label anomalies stay
    /// report-only even here; see `check_consistency`.
    pub fn new_strict(members: Vec<Person>) -> StoreResult<Self> {
        let store = Self::new(members)?;
        if let Some(issue) = store
            .check_consistency()
            .into_iter()
            .find(|issue| matches!(issue, ConsistencyIssue::DanglingReference { .. }))
        {
            return Err(StoreError::DanglingReference(issue));
        }
        Ok(store)
    }

    /// Resolves an id to its record.
    ///
    /// Absence is not an error: relationship fields may legitimately point
    /// outside whatever subset of the dataset a deployment loads.
    pub fn get_by_id(&self, id: PersonId) -> Option<&Person> {
        self.by_id.get(&id).map(|&index| &self.members[index])
    }

    /// All records in authored order.
    pub fn all(&self) -> &[Person] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Audits the stored collection for relationship inconsistencies.
    ///
    /// Returns every finding in stored-record order; an empty report means
    /// the authored data is internally coherent.
    pub fn check_consistency(&self) -> Vec<ConsistencyIssue> {
        check_members(self)
    }
}
