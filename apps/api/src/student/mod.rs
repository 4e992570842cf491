//! Student-facing endpoints: each handler binds one route to one fixed,
//! parameterized SQL statement.

pub mod handlers;
pub mod queries;
