use std::collections::BTreeMap;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use validator::ValidationErrors;

use crate::app::errors::DefaultApiError;

/// Error returned by every handler and service call.
///
/// Rendered as `{"code": "<status>", "message": "...", "errors": {field: message}}`.
#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub message: String,
    pub errors: BTreeMap<String, String>,
}

impl ApiError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
            errors: BTreeMap::new(),
        }
    }

    pub fn with_error(mut self, field: &str, message: &str) -> Self {
        self.errors.insert(field.to_string(), message.to_string());
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.code.is_server_error() {
            tracing::error!(code = %self.code, message = %self.message, "replying with error");
        } else {
            tracing::debug!(code = %self.code, message = %self.message, "replying with error");
        }

        let body = json!({
            "code": self.code.as_u16().to_string(),
            "message": self.message,
            "errors": self.errors,
        });

        (self.code, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        let mut api_error = DefaultApiError::InvalidRequest.value();

        for (field, field_errors) in e.field_errors() {
            let Some(error) = field_errors.first()
            else {
                continue;
            };

            let message = match &error.message {
                Some(message) => message.to_string(),
                None => error.code.to_string(),
            };

            api_error.errors.insert(field.to_string(), message);
        }

        api_error
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        DefaultApiError::InvalidRequest
            .value()
            .with_error("body", &rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        DefaultApiError::InvalidRequest
            .value()
            .with_error("path", &rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        DefaultApiError::InvalidRequest
            .value()
            .with_error("query", &rejection.body_text())
    }
}
