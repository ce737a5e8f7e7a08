//! Database repository layer for all domain entities.
//!
//! Repositories own every SQL statement in the application. They take
//! validated query/body types from the model layer, run parameterized
//! SeaORM queries, and hand entity models (or query-shaped records) back
//! to the controllers. Identifier-position SQL fragments (sort columns,
//! probe targets) only ever come from closed enums, never from request
//! strings.

pub mod article;
pub mod comment;
pub mod exists;
pub mod topic;
pub mod user;
