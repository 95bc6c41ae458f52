//! rosterd core — domain models, error taxonomy, and repository
//! trait definitions shared across all crates.

pub mod context;
pub mod error;
pub mod models;
pub mod repository;
