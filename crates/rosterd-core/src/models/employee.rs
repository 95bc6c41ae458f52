//! Employee domain model.
//!
//! Incidental CRUD payload managed through the generic record store;
//! the access-control core only cares about who may touch it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Username of the authenticated caller who created the record.
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied employee fields (create and update).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
