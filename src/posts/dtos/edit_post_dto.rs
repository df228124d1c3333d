use serde::Deserialize;
use validator::Validate;

use super::NOT_BLANK_REGEX;

/// Both fields are required: an edit replaces the whole post.
#[derive(Debug, Deserialize, Validate)]
pub struct EditPostDto {
    #[serde(default)]
    #[validate(regex(path = "NOT_BLANK_REGEX", message = "제목을 입력해주세요."))]
    pub title: String,
    #[serde(default)]
    #[validate(regex(path = "NOT_BLANK_REGEX", message = "내용을 입력해주세요."))]
    pub content: String,
}

impl EditPostDto {
    pub fn new(title: &str, content: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
        }
    }
}
