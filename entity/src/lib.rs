pub mod article;
pub mod comment;
pub mod prelude;
pub mod topic;
pub mod user;
