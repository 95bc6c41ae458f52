//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Implementations live in the
//! database crate; the auth and server layers depend only on these
//! traits.

use crate::error::RosterdResult;
use crate::models::employee::{Employee, EmployeeInput};
use crate::models::role::Role;
use crate::models::user::{CreateUser, User};

/// Credential store: users and their role assignments.
///
/// The store owns user records exclusively. Creating a user writes
/// the account and its role as one atomic record insert, so a user
/// can never exist without a role.
pub trait UserRepository: Send + Sync {
    /// Create a user. Fails with `AlreadyExists` if the username is
    /// taken.
    fn create(&self, input: CreateUser) -> impl Future<Output = RosterdResult<User>> + Send;

    /// Look up a user by username. Fails with `NotFound` if absent.
    fn get_by_username(&self, username: &str)
    -> impl Future<Output = RosterdResult<User>> + Send;

    /// Replace the role of an existing user. Fails with `NotFound`
    /// for an unknown username.
    fn update_role(
        &self,
        username: &str,
        role: Role,
    ) -> impl Future<Output = RosterdResult<User>> + Send;

    /// List all users, oldest first.
    fn list(&self) -> impl Future<Output = RosterdResult<Vec<User>>> + Send;
}

/// Generic record store for the employee CRUD resource.
pub trait EmployeeRepository: Send + Sync {
    fn find_all(&self) -> impl Future<Output = RosterdResult<Vec<Employee>>> + Send;

    fn find_by_id(&self, id: i64) -> impl Future<Output = RosterdResult<Employee>> + Send;

    /// Create a record, allocating the next sequential id atomically.
    fn create(
        &self,
        input: EmployeeInput,
        created_by: &str,
    ) -> impl Future<Output = RosterdResult<Employee>> + Send;

    fn update(
        &self,
        id: i64,
        input: EmployeeInput,
    ) -> impl Future<Output = RosterdResult<Employee>> + Send;

    fn delete_by_id(&self, id: i64) -> impl Future<Output = RosterdResult<()>> + Send;
}
