//! Relationship graph store.
//!
//! # Responsibility
//! - Own the full person collection for the lifetime of the process.
//! - Provide id resolution and ordered enumeration to the query layer.
//!
//! # Invariants
//! - The collection is read-only after construction.
//! - Stored order is authored order; lookups never reorder.

pub mod consistency;
pub mod family_store;
