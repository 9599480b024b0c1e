//! Shared domain types for the VCA Tech portal.
//!
//! Pure types and rules only: no database access, no HTTP, no I/O. Every
//! other crate in the workspace depends on this one.

pub mod documents;
pub mod error;
pub mod roles;
pub mod types;
