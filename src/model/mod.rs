//! Response DTOs and validated request/query types.
//!
//! Entity models stay inside the data layer; everything crossing the HTTP
//! boundary goes through the types here. Request bodies deserialize with
//! `deny_unknown_fields` so misnamed properties are rejected rather than
//! silently dropped.

pub mod api;
pub mod article;
pub mod comment;
pub mod page;
pub mod topic;
pub mod user;
