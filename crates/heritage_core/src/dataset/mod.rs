//! Dataset supply for the family store.
//!
//! # Responsibility
//! - Provide the authored demo collection as plain values.
//! - Load externally supplied collections from JSON text.
//!
//! # Invariants
//! - Loading produces records only; store-level validation still applies
//!   when the records are handed to `FamilyStore::new`.

use crate::model::person::Person;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod embedded;

pub use embedded::embedded_members;

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Error for dataset loading from external text.
#[derive(Debug)]
pub enum DatasetError {
    /// Input is not a well-formed JSON array of person records.
    Parse(serde_json::Error),
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "malformed person dataset: {err}"),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Parses a JSON array of person records.
///
/// Lets a deployment feed the store from a file or service instead of the
/// embedded table, without touching the store or query layers.
pub fn from_json_str(text: &str) -> DatasetResult<Vec<Person>> {
    Ok(serde_json::from_str(text)?)
}
