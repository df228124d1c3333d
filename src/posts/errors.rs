use axum::http::StatusCode;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

#[derive(Debug)]
pub enum PostsApiError {
    PostNotFound,
    InappropriateContent,
}

impl PostsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::PostNotFound => ApiError::new(StatusCode::NOT_FOUND, "존재하지 않는 글입니다."),
            Self::InappropriateContent => DefaultApiError::InvalidRequest
                .value()
                .with_error("content", "내용에 부적절한 단어가 감지되었습니다."),
        }
    }
}
