//! Newsboard Test Utils
//!
//! Shared testing utilities for the newsboard workspace. Provides a builder
//! for test contexts backed by in-memory SQLite databases, plus factories
//! for creating topic, user, article, and comment rows with sensible
//! defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_article_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_news_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
