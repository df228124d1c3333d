use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InvalidRequest,
    InternalServerError,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InvalidRequest => ApiError::new(StatusCode::BAD_REQUEST, "잘못된 요청입니다."),
            Self::InternalServerError => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "서버 오류가 발생했습니다.",
            ),
        }
    }
}
