//! Domain model for the family dataset.
//!
//! # Responsibility
//! - Define the canonical record shared by the store and query layers.
//!
//! # Invariants
//! - Every record is identified by an authored `PersonId`.
//! - Records are immutable once accepted by a store; no mutation API exists.

pub mod person;
