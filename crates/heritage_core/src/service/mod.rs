//! Core use-case services.
//!
//! # Responsibility
//! - Bundle the store and query operations into the facade the
//!   presentation layer actually holds.

pub mod heritage_service;
