use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

/// Logs a database failure and hides it behind a generic 500.
pub fn internal_error(e: sqlx::Error) -> ApiError {
    tracing::error!(%e);
    DefaultApiError::InternalServerError.value()
}
