//! Read-side query operations over a family store.
//!
//! # Responsibility
//! - Expose the two operations the presentation layer needs: name search
//!   and immediate-family expansion.
//!
//! # Invariants
//! - Every operation is pure and side-effect free; identical inputs over
//!   the same store always produce identical results.

pub mod family;
pub mod search;
