use thiserror::Error;

use crate::repository::RepositoryError;

pub mod cart;
pub mod menu;
pub mod orders;
pub mod schedules;

/// Result type returned by service-layer operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer to the route handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,
    /// A uniqueness constraint rejected the write.
    #[error("record already exists")]
    Conflict,
    /// User-actionable problem; the message is shown as a notice.
    #[error("{0}")]
    Form(String),
    /// Backend failure bubbled up from the table store.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::Conflict => Self::Conflict,
            err => Self::Repository(err),
        }
    }
}

/// Formats centavos as a peso amount ("1234.50").
pub fn format_price(price_cents: i64) -> String {
    format!("{:.2}", price_cents as f64 / 100.0)
}
