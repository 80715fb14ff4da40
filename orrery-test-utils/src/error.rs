use thiserror::Error;

/// Error type returned by test setup and fixture helpers.
#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
