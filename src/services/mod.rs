//! Application services sitting between routes and the repository.
//!
//! Services are plain functions generic over the repository traits they
//! need, so tests drive them with the mock repository.

use thiserror::Error;

use crate::ai::AiError;
use crate::repository::errors::RepositoryError;

pub mod chat;
pub mod invoice;
pub mod leads;
pub mod outreach;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Not found")]
    NotFound,
    #[error("Validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Ai(#[from] AiError),
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
