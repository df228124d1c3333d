use serde::Deserialize;
use validator::Validate;

use crate::{app::models::api_error::ApiError, posts::errors::PostsApiError};

use super::{FORBIDDEN_WORDS, NOT_BLANK_REGEX};

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostDto {
    #[serde(default)]
    #[validate(regex(path = "NOT_BLANK_REGEX", message = "제목을 입력해주세요."))]
    pub title: String,
    #[serde(default)]
    #[validate(regex(path = "NOT_BLANK_REGEX", message = "내용을 입력해주세요."))]
    pub content: String,
}

impl CreatePostDto {
    pub fn new(title: &str, content: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    /// Content policy check. Callers run this after `validate()` and before
    /// handing the dto to the service.
    pub fn validate_content(&self) -> Result<(), ApiError> {
        match FORBIDDEN_WORDS
            .iter()
            .any(|word| self.content.contains(word))
        {
            true => Err(PostsApiError::InappropriateContent.value()),
            false => Ok(()),
        }
    }
}
