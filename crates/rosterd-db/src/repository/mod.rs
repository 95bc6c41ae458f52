//! SurrealDB repository implementations.

mod employee;
mod user;

pub use employee::SurrealEmployeeRepository;
pub use user::SurrealUserRepository;
