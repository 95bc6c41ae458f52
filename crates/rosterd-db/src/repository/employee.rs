//! SurrealDB implementation of [`EmployeeRepository`].
//!
//! Employee records use sequential integer ids allocated from the
//! `counter:employee` record. Allocation and insert happen inside a
//! single transaction so an id can never be claimed without its
//! record landing.

use chrono::{DateTime, Utc};
use rosterd_core::error::RosterdResult;
use rosterd_core::models::employee::{Employee, EmployeeInput};
use rosterd_core::repository::EmployeeRepository;
use serde::Deserialize;
use surrealdb::{Connection, Surreal};

use crate::error::DbError;

/// DB-side row struct for queries where the id is already known.
#[derive(Debug, Deserialize)]
struct EmployeeRow {
    first_name: String,
    last_name: String,
    email: String,
    created_by: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, Deserialize)]
struct EmployeeRowWithId {
    record_id: i64,
    first_name: String,
    last_name: String,
    email: String,
    created_by: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl EmployeeRow {
    fn into_employee(self, id: i64) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            created_by: self.created_by,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<EmployeeRowWithId> for Employee {
    fn from(row: EmployeeRowWithId) -> Self {
        Employee {
            id: row.record_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            created_by: row.created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// SurrealDB implementation of the Employee repository.
pub struct SurrealEmployeeRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> Clone for SurrealEmployeeRepository<C> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}

impl<C: Connection> SurrealEmployeeRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> EmployeeRepository for SurrealEmployeeRepository<C> {
    async fn find_all(&self) -> RosterdResult<Vec<Employee>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM employee \
                 ORDER BY created_at ASC",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<EmployeeRowWithId> = result.take(0).map_err(DbError::from)?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> RosterdResult<Employee> {
        let mut result = self
            .db
            .query("SELECT * FROM type::thing('employee', $id)")
            .bind(("id", id))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<EmployeeRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "employee".into(),
            id: id.to_string(),
        })?;

        Ok(row.into_employee(id))
    }

    async fn create(&self, input: EmployeeInput, created_by: &str) -> RosterdResult<Employee> {
        let result = self
            .db
            .query(
                "BEGIN TRANSACTION; \
                 LET $next = (UPSERT ONLY counter:employee SET value += 1).value; \
                 SELECT meta::id(id) AS record_id, * FROM ( \
                     CREATE type::thing('employee', $next) SET \
                     first_name = $first_name, \
                     last_name = $last_name, \
                     email = $email, \
                     created_by = $created_by \
                 ); \
                 COMMIT TRANSACTION;",
            )
            .bind(("first_name", input.first_name))
            .bind(("last_name", input.last_name))
            .bind(("email", input.email))
            .bind(("created_by", created_by.to_string()))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(DbError::from)?;

        // Slot 0 is the LET statement; the SELECT is slot 1.
        let rows: Vec<EmployeeRowWithId> = result.take(1).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "employee".into(),
            id: "(new)".into(),
        })?;

        Ok(Employee::from(row))
    }

    async fn update(&self, id: i64, input: EmployeeInput) -> RosterdResult<Employee> {
        let result = self
            .db
            .query(
                "UPDATE type::thing('employee', $id) SET \
                 first_name = $first_name, \
                 last_name = $last_name, \
                 email = $email, \
                 updated_at = time::now()",
            )
            .bind(("id", id))
            .bind(("first_name", input.first_name))
            .bind(("last_name", input.last_name))
            .bind(("email", input.email))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(DbError::from)?;

        // UPDATE on a missing record id returns no rows.
        let rows: Vec<EmployeeRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "employee".into(),
            id: id.to_string(),
        })?;

        Ok(row.into_employee(id))
    }

    async fn delete_by_id(&self, id: i64) -> RosterdResult<()> {
        // Surface a missing record as NotFound before deleting.
        self.find_by_id(id).await?;

        self.db
            .query("DELETE type::thing('employee', $id)")
            .bind(("id", id))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(DbError::from)?;

        Ok(())
    }
}
