//! Domain models for rosterd.
//!
//! These are the core types shared across all crates.

pub mod employee;
pub mod role;
pub mod user;
