//! HTTP request handlers.
//!
//! Handlers validate and convert at the edge (path ids, query strings,
//! JSON bodies), delegate to the repositories, and wrap the results in
//! their response envelopes. Extractor rejections (non-numeric path
//! segments, malformed bodies) are mapped to Bad Request so error bodies
//! keep the `{"message": ...}` shape.

pub mod api;
pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;
