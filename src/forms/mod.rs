//! Form definitions backing table requests.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod table;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    #[error("cannot encode query string: {0}")]
    Encode(String),

    #[error("unknown or unsortable column: {0}")]
    InvalidSortColumn(String),

    #[error(transparent)]
    TypeConstraint(#[from] TypeConstraintError),
}
