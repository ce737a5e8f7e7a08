use thiserror::Error;

/// Errors raised while setting up a test environment.
#[derive(Debug, Error)]
pub enum TestError {
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
