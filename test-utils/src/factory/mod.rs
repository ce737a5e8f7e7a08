//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization via a builder
//! pattern, plus a `create_*` convenience function for quick default
//! creation. Factories do not create referenced rows implicitly; use the
//! helpers when a full topic/user/article chain is needed.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let topic = factory::topic::create_topic(&db).await?;
//! let user = factory::user::create_user(&db).await?;
//!
//! let article = factory::article::ArticleFactory::new(&db)
//!     .topic(&topic.slug)
//!     .author(&user.username)
//!     .votes(100)
//!     .build()
//!     .await?;
//! ```

pub mod article;
pub mod comment;
pub mod helpers;
pub mod topic;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use article::create_article;
pub use comment::create_comment;
pub use helpers::create_article_with_dependencies;
pub use topic::create_topic;
pub use user::create_user;
