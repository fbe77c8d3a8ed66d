use thiserror::Error;

pub mod table;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Form error: {0}")]
    Form(String),

    #[error("Type constraint error: {0}")]
    TypeConstraint(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
